use crate::Result;
use include_dir::include_dir;
use include_dir::Dir;
use rusqlite::Connection;
use tracing::info;
use tracing::warn;

static MIGRATIONS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/migrations");

/// Schema version and the SQL which brings the schema to that version.
struct Migration {
    version: i16,
    sql: &'static str,
}

pub fn run(conn: &mut Connection) -> Result<()> {
    execute(&embedded()?, conn)
}

/// Migrations are named `1.sql`, `2.sql`, ... and the sequence ends at the
/// first missing number.
fn embedded() -> Result<Vec<Migration>> {
    let mut res = vec![];
    for version in 1.. {
        let file_name = format!("{version}.sql");
        let Some(file) = MIGRATIONS_DIR.get_file(&file_name) else {
            break;
        };
        let sql = file
            .contents_utf8()
            .ok_or_else(|| format!("Can't read {file_name} as UTF-8"))?;
        res.push(Migration { version, sql });
    }
    Ok(res)
}

fn schema_version(conn: &Connection) -> Result<i16> {
    conn.query_row("SELECT user_version FROM pragma_user_version", [], |row| {
        row.get(0)
    })
    .map_err(Into::into)
}

fn execute(migrations: &[Migration], conn: &mut Connection) -> Result<()> {
    let current = schema_version(conn)?;
    for migration in migrations.iter().filter(|it| it.version > current) {
        warn!(version = migration.version, "Applying migration");
        let tx = conn.transaction()?;
        tx.execute_batch(migration.sql)?;
        tx.pragma_update(None, "user_version", migration.version)?;
        tx.commit()?;
    }
    info!(version = schema_version(conn)?, "Database schema is up to date");
    Ok(())
}

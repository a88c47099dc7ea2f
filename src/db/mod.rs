pub mod conf;
pub mod listing_request;
pub mod migration;
pub mod spot;

use crate::service::filesystem::data_dir_file_path;
use crate::Result;
use deadpool_sqlite::{Config, Pool, Runtime};
use rusqlite::Connection;

const DB_FILE_NAME: &str = "wifi-spot-map.db";

pub fn open_connection() -> Result<Connection> {
    let conn = Connection::open(data_dir_file_path(DB_FILE_NAME)?)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    Ok(conn)
}

/// Migrates the schema with a dedicated connection, then opens the pool
/// shared by all server workers.
pub fn pool() -> Result<Pool> {
    let mut conn = open_connection()?;
    migration::run(&mut conn)?;
    drop(conn);
    Config::new(data_dir_file_path(DB_FILE_NAME)?)
        .create_pool(Runtime::Tokio1)
        .map_err(Into::into)
}

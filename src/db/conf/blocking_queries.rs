use super::schema::{self, Columns, Conf};
use crate::Result;
use rusqlite::{params, Connection};

pub fn select(conn: &Connection) -> Result<Conf> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
        "#,
        projection = Conf::projection(),
        table = schema::TABLE_NAME,
    );
    conn.prepare(&sql)?
        .query_row((), Conf::mapper())
        .map_err(Into::into)
}

pub fn set_persist_spots(persist_spots: bool, conn: &Connection) -> Result<Conf> {
    let sql = format!(
        r#"
            UPDATE {table}
            SET {persist_spots} = ?1
        "#,
        table = schema::TABLE_NAME,
        persist_spots = Columns::PersistSpots.as_str(),
    );
    conn.execute(&sql, params![persist_spots])?;
    select(conn)
}

#[cfg(test)]
mod test {
    use crate::db::test::conn;

    #[test]
    fn select() -> crate::Result<()> {
        let conn = conn();
        let conf = super::select(&conn)?;
        assert_eq!("http://localhost/api", conf.api_url);
        assert_eq!(50_000.0, conf.service_area_radius_m);
        assert_eq!(500, conf.long_press_threshold_ms);
        assert_eq!("#3388ff", conf.fallback_color);
        assert!(!conf.persist_spots);
        Ok(())
    }

    #[test]
    fn set_persist_spots() -> crate::Result<()> {
        let conn = conn();
        let conf = super::set_persist_spots(true, &conn)?;
        assert!(conf.persist_spots);
        Ok(())
    }
}

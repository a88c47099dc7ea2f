use super::schema::{self, Columns};
use crate::spot::Spot;
use crate::Result;
use rusqlite::{named_params, params, Connection, OptionalExtension};

pub fn insert(spot: &Spot, conn: &Connection) -> Result<Spot> {
    let sql = format!(
        r#"
            INSERT INTO {table} ({id}, {name}, {lat}, {lng}, {category}, {phone}, {email}, {link})
            VALUES (:id, :name, :lat, :lng, :category, :phone, :email, :link)
            RETURNING {projection}
        "#,
        table = schema::TABLE_NAME,
        id = Columns::Id.as_str(),
        name = Columns::Name.as_str(),
        lat = Columns::Lat.as_str(),
        lng = Columns::Lng.as_str(),
        category = Columns::Category.as_str(),
        phone = Columns::Phone.as_str(),
        email = Columns::Email.as_str(),
        link = Columns::Link.as_str(),
        projection = schema::projection(),
    );
    conn.query_row(
        &sql,
        named_params! {
            ":id": spot.id,
            ":name": spot.name,
            ":lat": spot.lat,
            ":lng": spot.lng,
            ":category": spot.category,
            ":phone": spot.phone,
            ":email": spot.email,
            ":link": spot.link,
        },
        schema::mapper(),
    )
    .map_err(Into::into)
}

pub fn select_all(conn: &Connection) -> Result<Vec<Spot>> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            ORDER BY {created_at}, rowid
        "#,
        projection = schema::projection(),
        table = schema::TABLE_NAME,
        created_at = Columns::CreatedAt.as_str(),
    );
    conn.prepare(&sql)?
        .query_map(params![], schema::mapper())?
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}

pub fn select_by_id(id: &str, conn: &Connection) -> Result<Option<Spot>> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE {id} = ?1
        "#,
        projection = schema::projection(),
        table = schema::TABLE_NAME,
        id = Columns::Id.as_str(),
    );
    conn.query_row(&sql, params![id], schema::mapper())
        .optional()
        .map_err(Into::into)
}

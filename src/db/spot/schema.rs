use crate::spot::Spot;
use rusqlite::Row;
use std::sync::OnceLock;

pub const TABLE_NAME: &str = "spot";

pub enum Columns {
    Id,
    Name,
    Lat,
    Lng,
    Category,
    Phone,
    Email,
    Link,
    CreatedAt,
}

impl Columns {
    pub fn as_str(&self) -> &'static str {
        match self {
            Columns::Id => "id",
            Columns::Name => "name",
            Columns::Lat => "lat",
            Columns::Lng => "lng",
            Columns::Category => "category",
            Columns::Phone => "phone",
            Columns::Email => "email",
            Columns::Link => "link",
            Columns::CreatedAt => "created_at",
        }
    }
}

pub fn projection() -> &'static str {
    static PROJECTION: OnceLock<String> = OnceLock::new();
    PROJECTION.get_or_init(|| {
        [
            Columns::Id,
            Columns::Name,
            Columns::Lat,
            Columns::Lng,
            Columns::Category,
            Columns::Phone,
            Columns::Email,
            Columns::Link,
        ]
        .iter()
        .map(Columns::as_str)
        .collect::<Vec<_>>()
        .join(", ")
    })
}

pub const fn mapper() -> fn(&Row) -> rusqlite::Result<Spot> {
    |row| {
        Ok(Spot {
            id: row.get(Columns::Id.as_str())?,
            name: row.get(Columns::Name.as_str())?,
            lat: row.get(Columns::Lat.as_str())?,
            lng: row.get(Columns::Lng.as_str())?,
            category: row.get(Columns::Category.as_str())?,
            phone: row.get(Columns::Phone.as_str())?,
            email: row.get(Columns::Email.as_str())?,
            link: row.get(Columns::Link.as_str())?,
        })
    }
}

use crate::form::ListingRequest;
use rusqlite::Row;
use std::sync::OnceLock;
use time::OffsetDateTime;

pub const TABLE_NAME: &str = "listing_request";

pub enum Columns {
    Id,
    Fields,
    Forwarded,
    ForwardError,
    CreatedAt,
}

impl Columns {
    pub fn as_str(&self) -> &'static str {
        match self {
            Columns::Id => "id",
            Columns::Fields => "fields",
            Columns::Forwarded => "forwarded",
            Columns::ForwardError => "forward_error",
            Columns::CreatedAt => "created_at",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListingRequestRecord {
    pub id: String,
    pub fields: ListingRequest,
    pub forwarded: bool,
    pub forward_error: Option<String>,
    pub created_at: OffsetDateTime,
}

impl ListingRequestRecord {
    pub fn projection() -> &'static str {
        static PROJECTION: OnceLock<String> = OnceLock::new();
        PROJECTION.get_or_init(|| {
            [
                Columns::Id,
                Columns::Fields,
                Columns::Forwarded,
                Columns::ForwardError,
                Columns::CreatedAt,
            ]
            .iter()
            .map(Columns::as_str)
            .collect::<Vec<_>>()
            .join(", ")
        })
    }

    pub const fn mapper() -> fn(&Row) -> rusqlite::Result<Self> {
        |row| {
            let fields: String = row.get(Columns::Fields.as_str())?;
            let fields = serde_json::from_str(&fields).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    1,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?;
            Ok(Self {
                id: row.get(Columns::Id.as_str())?,
                fields,
                forwarded: row.get(Columns::Forwarded.as_str())?,
                forward_error: row.get(Columns::ForwardError.as_str())?,
                created_at: row.get(Columns::CreatedAt.as_str())?,
            })
        }
    }
}

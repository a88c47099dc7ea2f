use super::schema::{self, Columns, ListingRequestRecord};
use crate::form::ListingRequest;
use crate::Result;
use rusqlite::{named_params, params, Connection};

pub fn insert(
    id: &str,
    fields: &ListingRequest,
    conn: &Connection,
) -> Result<ListingRequestRecord> {
    let sql = format!(
        r#"
            INSERT INTO {table} ({id}, {fields})
            VALUES (:id, json(:fields))
            RETURNING {projection}
        "#,
        table = schema::TABLE_NAME,
        id = Columns::Id.as_str(),
        fields = Columns::Fields.as_str(),
        projection = ListingRequestRecord::projection(),
    );
    conn.query_row(
        &sql,
        named_params! {
            ":id": id,
            ":fields": serde_json::to_string(fields)?,
        },
        ListingRequestRecord::mapper(),
    )
    .map_err(Into::into)
}

pub fn set_forward_result(
    id: &str,
    forward_error: Option<&str>,
    conn: &Connection,
) -> Result<ListingRequestRecord> {
    let sql = format!(
        r#"
            UPDATE {table}
            SET {forwarded} = ?2, {forward_error} = ?3
            WHERE {id} = ?1
        "#,
        table = schema::TABLE_NAME,
        forwarded = Columns::Forwarded.as_str(),
        forward_error = Columns::ForwardError.as_str(),
        id = Columns::Id.as_str(),
    );
    conn.execute(&sql, params![id, forward_error.is_none(), forward_error])?;
    select_by_id(id, conn)
}

pub fn select_by_id(id: &str, conn: &Connection) -> Result<ListingRequestRecord> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE {id} = ?1
        "#,
        projection = ListingRequestRecord::projection(),
        table = schema::TABLE_NAME,
        id = Columns::Id.as_str(),
    );
    conn.query_row(&sql, params![id], ListingRequestRecord::mapper())
        .map_err(Into::into)
}

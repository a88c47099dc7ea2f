use super::{blocking_queries, schema::ListingRequestRecord};
use crate::form::ListingRequest;
use crate::Result;
use deadpool_sqlite::Pool;

pub async fn insert(
    id: String,
    fields: ListingRequest,
    pool: &Pool,
) -> Result<ListingRequestRecord> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::insert(&id, &fields, conn))
        .await?
}

pub async fn set_forward_result(
    id: String,
    forward_error: Option<String>,
    pool: &Pool,
) -> Result<ListingRequestRecord> {
    pool.get()
        .await?
        .interact(move |conn| {
            blocking_queries::set_forward_result(&id, forward_error.as_deref(), conn)
        })
        .await?
}

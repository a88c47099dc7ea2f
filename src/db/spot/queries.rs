use super::blocking_queries;
use crate::spot::Spot;
use crate::Result;
use deadpool_sqlite::Pool;

pub async fn insert(spot: Spot, pool: &Pool) -> Result<Spot> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::insert(&spot, conn))
        .await?
}

pub async fn select_all(pool: &Pool) -> Result<Vec<Spot>> {
    pool.get()
        .await?
        .interact(|conn| blocking_queries::select_all(conn))
        .await?
}

pub async fn select_by_id(id: impl Into<String>, pool: &Pool) -> Result<Option<Spot>> {
    let id = id.into();
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::select_by_id(&id, conn))
        .await?
}

use crate::db;
use crate::{Error, Result};
use deadpool_sqlite::Pool;
use tracing::info;

/// `set-persist-spots <true|false>`
pub async fn run(args: &[String], pool: &Pool) -> Result<()> {
    let persist_spots = match args.first().map(String::as_str) {
        Some("true") => true,
        Some("false") => false,
        _ => Err(Error::InvalidInput(
            "Usage: set-persist-spots <true|false>".into(),
        ))?,
    };
    let conf = db::conf::queries::set_persist_spots(persist_spots, pool).await?;
    info!(persist_spots = conf.persist_spots, "Updated conf");
    Ok(())
}

use crate::db;
use crate::service::session::Session;
use crate::service::spot_source::SpotSource;
use crate::Result;
use deadpool_sqlite::Pool;

/// Prints the loaded spots as JSON.
pub async fn run(pool: &Pool) -> Result<()> {
    let conf = db::conf::queries::select(pool).await?;
    let session = Session::new(&conf);
    session.load(&SpotSource::new(conf.api_url.clone())?, pool).await;
    println!("{}", serde_json::to_string_pretty(&session.spots())?);
    Ok(())
}

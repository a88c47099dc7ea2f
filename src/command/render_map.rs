use crate::db;
use crate::service::map_image;
use crate::service::session::Session;
use crate::service::spot_source::SpotSource;
use crate::Result;
use actix_web::web;
use deadpool_sqlite::Pool;
use std::fs;
use tracing::info;

/// `render-map <out.png> [category]`
pub async fn run(args: &[String], pool: &Pool) -> Result<()> {
    let out = args
        .first()
        .ok_or("Usage: render-map <out.png> [category]")?
        .clone();
    let category = args.get(1).cloned().unwrap_or_default();
    let conf = db::conf::queries::select(pool).await?;
    let session = Session::new(&conf);
    session.load(&SpotSource::new(conf.api_url.clone())?, pool).await;
    let view = session.map_view(&category, &[]);
    let markers = map_image::marker_tints(&view).len();
    let png = web::block(move || map_image::render_png(&view)).await??;
    fs::write(&out, &png)?;
    info!(out, markers, bytes = png.len(), "Rendered map");
    Ok(())
}

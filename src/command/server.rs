use crate::db;
use crate::log;
use crate::rest;
use crate::rest::error;
use crate::service::listing::ListingIntake;
use crate::service::postal::PostalLookup;
use crate::service::session::Session;
use crate::service::spot_source::SpotSource;
use crate::Result;
use actix_web::middleware::from_fn;
use actix_web::web::scope;
use actix_web::web::{JsonConfig, QueryConfig};
use actix_web::{
    middleware::{Compress, NormalizePath},
    web::Data,
    App, HttpServer,
};
use tracing::info;

const ADDR: (&str, u16) = ("127.0.0.1", 8000);

pub async fn run() -> Result<()> {
    // All the worker threads are sharing a single connection pool
    let pool = Data::new(db::pool()?);
    let conf = db::conf::queries::select(&pool).await?;

    let session = Data::new(Session::new(&conf));
    let postal = PostalLookup::new(conf.postal_lookup_url.clone())?;
    let intake = Data::new(ListingIntake::new(
        conf.listing_intake_url.clone(),
        postal.clone(),
    )?);
    let postal = Data::new(postal);

    // The map is served empty until the source answers
    let source = SpotSource::new(conf.api_url.clone())?;
    actix_web::rt::spawn({
        let session = session.clone();
        let pool = pool.clone();
        async move { session.load(&source, &pool).await }
    });

    info!(
        host = ADDR.0,
        port = ADDR.1,
        persist_spots = conf.persist_spots,
        "Starting server"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(log::handle_request))
            .wrap(NormalizePath::trim())
            .wrap(Compress::default())
            .app_data(pool.clone())
            .app_data(session.clone())
            .app_data(intake.clone())
            .app_data(postal.clone())
            .app_data(QueryConfig::default().error_handler(error::query_error_handler))
            .app_data(JsonConfig::default().error_handler(error::json_error_handler))
            .service(
                scope("spots")
                    .service(rest::spots::get)
                    .service(rest::spots::post),
            )
            .service(scope("categories").service(rest::categories::get))
            .service(
                scope("map")
                    .service(rest::map::get)
                    .service(rest::map::get_geojson)
                    .service(rest::map::get_png),
            )
            .service(scope("listing-requests").service(rest::listing_requests::post))
            .service(scope("postal-codes").service(rest::postal_codes::get))
    })
    .bind(ADDR)?
    .run()
    .await?;

    Ok(())
}

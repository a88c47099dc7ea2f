use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wifi_spot_map::{command, db, Error, Result};

#[actix_web::main]
async fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().collect();

    let command = match args.get(1) {
        Some(some) => some,
        None => Err(Error::InvalidInput(
            "No command passed, expected one of: server, render-map, spots, set-persist-spots"
                .into(),
        ))?,
    };

    match command.as_str() {
        "server" => command::server::run().await?,
        "render-map" => command::render_map::run(&args[2..], &db::pool()?).await?,
        "spots" => command::spots::run(&db::pool()?).await?,
        "set-persist-spots" => command::set_persist_spots::run(&args[2..], &db::pool()?).await?,
        first_arg => Err(Error::InvalidInput(format!("Unknown command: {first_arg}")))?,
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if cfg!(debug_assertions) {
        registry.with(tracing_subscriber::fmt::layer()).init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    }
}

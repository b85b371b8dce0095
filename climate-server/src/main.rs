use std::process::ExitCode;

use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use climate_server::config::ServerConfig;
use climate_server::store::ClimateStore;
use climate_server::web::{AppState, create_router, templates::ROUTES};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("climate_server=info,tower_http=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    // Fail fast if the database is missing or has the wrong shape
    let store = ClimateStore::new(&config.db_path);
    store.verify_schema().await?;
    info!(path = %store.path().display(), "database schema ok");

    match store.dataset_range().await? {
        Some(range) => info!(
            earliest = %range.earliest,
            latest = %range.latest,
            days = ?range.span_days(),
            "loaded measurements"
        ),
        None => warn!("measurement table is empty"),
    }
    for station in store.station_records().await? {
        debug!(station = %station.station, name = %station.name, "station");
    }

    let app = create_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Climate API listening on http://{}", listener.local_addr()?);
    for route in ROUTES {
        info!("  GET  {:<32} - {}", route.path, route.description);
    }

    axum::serve(listener, app).await?;
    Ok(())
}

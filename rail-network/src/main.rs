use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rail_network::config::ServerConfig;
use rail_network::loader::load_network_csv;
use rail_network::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Fail fast if the station list is unusable
    let network = match load_network_csv(&config.stations_path, config.delimiter) {
        Ok(network) => network,
        Err(e) => {
            error!(path = %config.stations_path.display(), "Failed to load stations: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        stations = network.n_stations(),
        regions = network.regions().len(),
        hub_regions = network.hub_stations_by_region().len(),
        "Loaded rail network"
    );

    let app = create_router(AppState::new(network));

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "Failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Rail fares API listening on http://{}", config.bind_addr);
    info!("  GET /health");
    info!("  GET /regions");
    info!("  GET /hubs[/:region]");
    info!("  GET /stations/:crs/closest-hub");
    info!("  GET /journey/plan?from=&to=");
    info!("  GET /journey/fare?from=&to=&summary=");
    info!("  GET /fares/to/:crs");

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

use log::{error, info};
use road_router::config::ServerConfig;
use road_router::loader::load_graph;
use road_router::web::{start_server, AppState};
use road_router::RouteService;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let mut config = ServerConfig::from_env()?;

    // An optional first argument overrides the port
    if let Some(arg) = env::args().nth(1) {
        config.port = arg
            .parse()
            .map_err(|_| format!("invalid port argument {:?}", arg))?;
    }

    info!("Starting road router");
    info!("  Listen address: {}", config.socket_addr());
    info!("  Graph data: {}", config.data_path.display());
    info!("  Query timeout: {:?}", config.query_timeout);

    // Never serve without a fully built graph
    let graph = load_graph(&config.data_path).map_err(|e| {
        error!(
            "Failed to load graph data from {}: {}",
            config.data_path.display(),
            e
        );
        e
    })?;

    let service = RouteService::new(graph)?.with_query_timeout(config.query_timeout);
    let state = AppState::new(service).with_data_path(config.data_path.clone());

    start_server(config, state).await
}

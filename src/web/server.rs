use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;
use crate::web::api::{create_router, AppState};

/// Build the application with middleware
pub fn build_app(config: &ServerConfig, state: AppState) -> Router {
    let app = Router::new().merge(create_router()).with_state(state);

    if !config.enable_cors {
        return app;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    app.layer(ServiceBuilder::new().layer(cors).into_inner())
}

/// Start the web server
pub async fn start_server(
    config: ServerConfig,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.socket_addr();
    let app = build_app(&config, state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Road router listening on http://{}", addr);
    info!("CORS enabled: {}", config.enable_cors);

    axum::serve(listener, app).await?;

    Ok(())
}

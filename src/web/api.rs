use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{error, info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

use crate::graph::{Graph, NodeId};
use crate::loader::load_graph;
use crate::service::RouteService;
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RouteService>,
    /// Document re-read by `/api/reload`, if reloading is enabled
    pub data_path: Option<PathBuf>,
}

impl AppState {
    pub fn new(service: RouteService) -> Self {
        Self {
            service: Arc::new(service),
            data_path: None,
        }
    }

    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = Some(path.into());
        self
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/nodes", get(get_all_nodes))
        .route("/api/shortest_path", get(get_shortest_path))
        .route("/api/reload", post(reload_graph))
        .route("/api/health", get(health_check))
}

/// List every node with its coordinates
pub async fn get_all_nodes(State(state): State<AppState>) -> Json<Vec<NodeSummary>> {
    let nodes = state
        .service
        .nodes()
        .into_iter()
        .map(NodeSummary::from)
        .collect();
    Json(nodes)
}

/// Shortest path between two nodes
pub async fn get_shortest_path(
    State(state): State<AppState>,
    query: Result<Query<ShortestPathQuery>, QueryRejection>,
) -> Result<Json<ShortestPathResponse>, ApiError> {
    let query_id = Uuid::new_v4();

    let Query(query) = query.map_err(|rejection| {
        api_error(
            StatusCode::BAD_REQUEST,
            "invalid_query",
            rejection.body_text(),
        )
    })?;

    let (source, target) = match (query.source.as_deref(), query.target.as_deref()) {
        (Some(source), Some(target)) if !source.trim().is_empty() && !target.trim().is_empty() => {
            (source, target)
        }
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "missing_parameters",
                "Source and target nodes are required".to_string(),
            ));
        }
    };

    let source = RouteService::parse_node_id(source).map_err(|e| map_error(&e, query_id, 0, 0))?;
    let target = RouteService::parse_node_id(target).map_err(|e| map_error(&e, query_id, 0, 0))?;

    let service = state.service.clone();
    let result = tokio::task::spawn_blocking(move || service.shortest_path(source, target))
        .await
        .map_err(|e| {
            error!("query {}: search task failed: {}", query_id, e);
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Search task failed".to_string(),
            )
        })?;

    match result {
        Ok(route) => {
            info!(
                "query {}: {} -> {} distance {:.1} over {} nodes",
                query_id,
                source,
                target,
                route.distance,
                route.coords.len()
            );
            Ok(Json(ShortestPathResponse {
                coords: route.coords,
                distance: route.distance,
                query_id,
            }))
        }
        Err(e) => Err(map_error(&e, query_id, source, target)),
    }
}

/// Rebuild the graph from the data document and swap it in
pub async fn reload_graph(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, ApiError> {
    let path = match &state.data_path {
        Some(path) => path.clone(),
        None => {
            return Err(api_error(
                StatusCode::CONFLICT,
                "reload_unavailable",
                "Server was started without a graph data path".to_string(),
            ));
        }
    };

    let service = state.service.clone();
    let loaded = tokio::task::spawn_blocking(move || {
        let graph = load_graph(&path)?;
        let counts = ReloadResponse {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
        };
        service.replace_graph(graph)?;
        Ok::<_, Error>(counts)
    })
    .await
    .map_err(|e| {
        error!("graph reload task failed: {}", e);
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "Reload task failed".to_string(),
        )
    })?;

    match loaded {
        Ok(counts) => Ok(Json(counts)),
        Err(e) => {
            warn!("graph reload rejected, keeping current graph: {}", e);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "reload_failed",
                format!("Failed to reload graph: {}", e),
            ))
        }
    }
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let graph = state.service.snapshot();
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "nodes": graph.node_count(),
        "edges": graph.edge_count()
    }))
}

// Helper functions

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
        }),
    )
}

fn map_error(err: &Error, query_id: Uuid, source: NodeId, target: NodeId) -> ApiError {
    match err {
        Error::Validation(_) => api_error(
            StatusCode::BAD_REQUEST,
            "invalid_node_id",
            "Node IDs must be integers".to_string(),
        ),
        Error::NodeNotFound(id) => {
            let role = if *id == source { "Source" } else if *id == target { "Target" } else { "Path" };
            api_error(
                StatusCode::NOT_FOUND,
                "node_not_found",
                format!("{} node {} not found", role, id),
            )
        }
        Error::NoPathFound { .. } => api_error(
            StatusCode::NOT_FOUND,
            "no_path",
            "No path found between the nodes".to_string(),
        ),
        Error::DeadlineExceeded | Error::Cancelled => {
            warn!("query {}: {} -> {} gave up: {}", query_id, source, target, err);
            api_error(
                StatusCode::GATEWAY_TIMEOUT,
                "query_timeout",
                "Route search took too long".to_string(),
            )
        }
        Error::CorruptedState(_) => {
            error!("query {}: BUG: {} -> {}: {}", query_id, source, target, err);
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "corrupted_state",
                "Internal routing error".to_string(),
            )
        }
        other => {
            error!("query {}: {} -> {} failed: {}", query_id, source, target, other);
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                other.to_string(),
            )
        }
    }
}

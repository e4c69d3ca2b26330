use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use road_router::config::ServerConfig;
use road_router::graph::{Edge, Node, RoadGraph};
use road_router::web::models::{ErrorResponse, NodeSummary, ReloadResponse, ShortestPathResponse};
use road_router::web::{build_app, AppState};
use road_router::RouteService;
use serde::de::DeserializeOwned;
use std::io::Write;
use tower::ServiceExt;

fn sample_service() -> RouteService {
    let graph = RoadGraph::build(
        vec![
            Node::new(1, 50.0, 4.0),
            Node::new(2, 50.1, 4.1),
            Node::new(3, 50.2, 4.2),
            Node::new(4, 51.0, 5.0),
        ],
        vec![Edge::new(1, 2, 5.0), Edge::new(2, 3, 2.0), Edge::new(1, 3, 9.0)],
    )
    .unwrap();
    RouteService::new(graph).unwrap()
}

fn app(state: AppState) -> Router {
    build_app(&ServerConfig::default(), state)
}

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

fn parse<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn test_shortest_path_returns_coordinates_and_distance() {
    let (status, body) = send(
        app(AppState::new(sample_service())),
        "GET",
        "/api/shortest_path?source=1&target=3",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let response: ShortestPathResponse = parse(&body);
    assert_eq!(response.distance, 7.0);
    let lats: Vec<f64> = response.coords.iter().map(|c| c.lat).collect();
    assert_eq!(lats, vec![50.0, 50.1, 50.2]);
}

#[tokio::test]
async fn test_error_statuses() {
    let cases = [
        ("/api/shortest_path?source=1", StatusCode::BAD_REQUEST, "missing_parameters"),
        ("/api/shortest_path?source=&target=3", StatusCode::BAD_REQUEST, "missing_parameters"),
        ("/api/shortest_path?source=one&target=3", StatusCode::BAD_REQUEST, "invalid_node_id"),
        ("/api/shortest_path?source=1&target=99", StatusCode::NOT_FOUND, "node_not_found"),
        ("/api/shortest_path?source=1&target=4", StatusCode::NOT_FOUND, "no_path"),
        ("/api/shortest_path?source=1&source=2&target=3", StatusCode::BAD_REQUEST, "invalid_query"),
    ];

    for (uri, expected_status, expected_code) in cases {
        let (status, body) = send(app(AppState::new(sample_service())), "GET", uri).await;
        assert_eq!(status, expected_status, "{}", uri);
        let error: ErrorResponse = parse(&body);
        assert_eq!(error.error, expected_code, "{}", uri);
    }
}

#[tokio::test]
async fn test_not_found_names_the_missing_node() {
    let (_, body) = send(
        app(AppState::new(sample_service())),
        "GET",
        "/api/shortest_path?source=99&target=1",
    )
    .await;
    let error: ErrorResponse = parse(&body);
    assert_eq!(error.message, "Source node 99 not found");
}

#[tokio::test]
async fn test_lists_all_nodes() {
    let (status, body) = send(app(AppState::new(sample_service())), "GET", "/api/nodes").await;
    assert_eq!(status, StatusCode::OK);

    let nodes: Vec<NodeSummary> = parse(&body);
    assert_eq!(nodes.len(), 4);
    assert_eq!(nodes[0], NodeSummary { id: 1, lat: 50.0, lon: 4.0 });
}

#[tokio::test]
async fn test_health_reports_graph_size() {
    let (status, body) = send(app(AppState::new(sample_service())), "GET", "/api/health").await;
    assert_eq!(status, StatusCode::OK);

    let health: serde_json::Value = parse(&body);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["nodes"], 4);
    assert_eq!(health["edges"], 3);
}

#[tokio::test]
async fn test_reload_swaps_graph() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"{"nodes": {"1": {"lat": 0.0, "lon": 0.0}, "4": {"lat": 1.0, "lon": 1.0}},
             "edges": [{"source": "1", "target": "4", "weight": 12.5}]}"#,
    )
    .unwrap();
    file.flush().unwrap();

    let state = AppState::new(sample_service()).with_data_path(file.path());

    let (status, body) = send(app(state.clone()), "POST", "/api/reload").await;
    assert_eq!(status, StatusCode::OK);
    let counts: ReloadResponse = parse(&body);
    assert_eq!((counts.nodes, counts.edges), (2, 1));

    let (status, body) = send(app(state), "GET", "/api/shortest_path?source=1&target=4").await;
    assert_eq!(status, StatusCode::OK);
    let response: ShortestPathResponse = parse(&body);
    assert_eq!(response.distance, 12.5);
}

#[tokio::test]
async fn test_failed_reload_keeps_serving_old_graph() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();
    file.flush().unwrap();

    let state = AppState::new(sample_service()).with_data_path(file.path());

    let (status, body) = send(app(state.clone()), "POST", "/api/reload").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorResponse = parse(&body);
    assert_eq!(error.error, "reload_failed");

    let (status, _) = send(app(state), "GET", "/api/shortest_path?source=1&target=3").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_reload_without_data_path_is_rejected() {
    let (status, _) = send(app(AppState::new(sample_service())), "POST", "/api/reload").await;
    assert_eq!(status, StatusCode::CONFLICT);
}

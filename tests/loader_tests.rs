use road_router::graph::Graph;
use road_router::loader::load_graph;
use road_router::{Error, RouteService};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_document(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_graph_from_file_and_route() {
    let file = write_document(
        r#"{
            "nodes": {
                "10": {"lat": 50.8503, "lon": 4.3517},
                "20": {"lat": 50.8467, "lon": 4.3525},
                "30": {"lat": 50.8449, "lon": 4.3499}
            },
            "edges": [
                {"source": "10", "target": "20", "weight": 402.5},
                {"source": "20", "target": "30", "weight": 260.0},
                {"source": "10", "target": "30", "weight": 700.0},
                {"source": "30", "target": "10", "weight": 690.0}
            ]
        }"#,
    );

    let graph = load_graph(file.path()).unwrap();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 4);

    let service = RouteService::new(graph).unwrap();
    let response = service.shortest_path(10, 30).unwrap();
    assert_eq!(response.distance, 662.5);
    assert_eq!(response.coords.len(), 3);
    assert_eq!(response.coords[0].lat, 50.8503);
    assert_eq!(response.coords[2].lon, 4.3499);
}

#[test]
fn test_missing_document_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_graph(dir.path().join("graph_data.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_malformed_document_fails_startup() {
    let cases = [
        "",
        "{",
        r#"{"nodes": []}"#,
        r#"{"nodes": {"1": {"lat": "north", "lon": 0.0}}, "edges": []}"#,
        r#"{"nodes": {"1": {"lat": 0.0, "lon": 0.0}}, "edges": [{"source": "1", "target": "1"}]}"#,
    ];

    for contents in cases {
        let file = write_document(contents);
        let result = load_graph(file.path());
        assert!(matches!(result, Err(Error::Json(_))), "{:?} should be rejected", contents);
    }
}

#[test]
fn test_invalid_data_fails_startup() {
    let cases = [
        r#"{"nodes": {}, "edges": []}"#,
        r#"{"nodes": {"one": {"lat": 0.0, "lon": 0.0}}, "edges": []}"#,
        r#"{"nodes": {"1": {"lat": 0.0, "lon": 0.0}}, "edges": [{"source": "1", "target": "2", "weight": 1.0}]}"#,
        r#"{"nodes": {"1": {"lat": 0.0, "lon": 0.0}, "2": {"lat": 1.0, "lon": 0.0}}, "edges": [{"source": "1", "target": "2", "weight": -0.5}]}"#,
    ];

    for contents in cases {
        let file = write_document(contents);
        let result = load_graph(file.path());
        assert!(matches!(result, Err(Error::Data(_))), "{:?} should be rejected", contents);
    }
}

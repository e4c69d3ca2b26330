//! Strict loader for the graph data document
//!
//! The document is JSON of the form
//!
//! ```json
//! { "nodes": { "101": { "lat": 50.85, "lon": 4.35 } },
//!   "edges": [ { "source": "101", "target": 102, "weight": 84.2 } ] }
//! ```
//!
//! Edge endpoints may be written as decimal strings or JSON integers. Everything
//! is validated before a graph is returned, so a malformed document can never
//! produce a partially built graph.

use log::info;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::graph::{Edge, Graph, Node, NodeId, RoadGraph};
use crate::{Error, Result};

/// Position record keyed by node id in the document
#[derive(Debug, Clone, Deserialize)]
pub struct NodeRecord {
    pub lat: f64,
    pub lon: f64,
}

/// Node id as written in an edge record
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNodeId {
    Number(serde_json::Number),
    Text(String),
}

/// Directed edge record
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeRecord {
    pub source: RawNodeId,
    pub target: RawNodeId,
    pub weight: f64,
}

/// The graph data document as it appears on disk
#[derive(Debug, Clone, Deserialize)]
pub struct GraphDocument {
    pub nodes: BTreeMap<String, NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    /// Validates the document and builds the road graph
    pub fn into_graph(self) -> Result<RoadGraph<f64>> {
        if self.nodes.is_empty() {
            return Err(Error::Data("document declares no nodes".to_string()));
        }

        let mut nodes = Vec::with_capacity(self.nodes.len());
        let mut declared: HashSet<NodeId> = HashSet::with_capacity(self.nodes.len());
        for (key, record) in &self.nodes {
            let id = parse_id(key)?;
            if !declared.insert(id) {
                return Err(Error::Data(format!("node id {} declared more than once", id)));
            }
            nodes.push(Node::new(id, record.lat, record.lon));
        }

        let mut edges = Vec::with_capacity(self.edges.len());
        for (index, record) in self.edges.iter().enumerate() {
            let source = record.source.resolve()?;
            let target = record.target.resolve()?;
            for endpoint in [source, target] {
                if !declared.contains(&endpoint) {
                    return Err(Error::Data(format!(
                        "edge #{} references undeclared node {}",
                        index, endpoint
                    )));
                }
            }
            edges.push(Edge::new(source, target, record.weight));
        }

        let graph = RoadGraph::build(nodes, edges)?;
        info!(
            "Loaded road graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl RawNodeId {
    fn resolve(&self) -> Result<NodeId> {
        match self {
            RawNodeId::Number(number) => number
                .as_u64()
                .ok_or_else(|| Error::Data(format!("invalid node id {}", number))),
            RawNodeId::Text(text) => parse_id(text),
        }
    }
}

fn parse_id(raw: &str) -> Result<NodeId> {
    raw.trim()
        .parse::<NodeId>()
        .map_err(|_| Error::Data(format!("invalid node id {:?}", raw)))
}

/// Reads and validates a graph document from any reader
pub fn read_graph<R: Read>(reader: R) -> Result<RoadGraph<f64>> {
    let document: GraphDocument = serde_json::from_reader(reader)?;
    document.into_graph()
}

/// Parses and validates a graph document held in memory
pub fn parse_graph(json: &str) -> Result<RoadGraph<f64>> {
    let document: GraphDocument = serde_json::from_str(json)?;
    document.into_graph()
}

/// Loads and validates the graph document at `path`
pub fn load_graph(path: impl AsRef<Path>) -> Result<RoadGraph<f64>> {
    let path = path.as_ref();
    info!("Loading graph data from {}", path.display());
    let file = File::open(path)?;
    read_graph(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "nodes": {
            "1": {"lat": 50.0, "lon": 4.0},
            "2": {"lat": 50.1, "lon": 4.1},
            "3": {"lat": 50.2, "lon": 4.2}
        },
        "edges": [
            {"source": "1", "target": "2", "weight": 5.0},
            {"source": 2, "target": 3, "weight": 2.0},
            {"source": "1", "target": "3", "weight": 9.0}
        ]
    }"#;

    #[test]
    fn test_parses_string_and_integer_ids() {
        let graph = parse_graph(SAMPLE).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge_weight(2, 3), Some(2.0));
        assert_eq!(graph.coordinates(2).unwrap().lat, 50.1);
    }

    #[test]
    fn test_rejects_non_numeric_ids() {
        let doc = r#"{"nodes": {"abc": {"lat": 0.0, "lon": 0.0}}, "edges": []}"#;
        assert!(matches!(parse_graph(doc), Err(Error::Data(_))));

        let doc = r#"{"nodes": {"1": {"lat": 0.0, "lon": 0.0}},
                      "edges": [{"source": "1", "target": "x1", "weight": 1.0}]}"#;
        assert!(matches!(parse_graph(doc), Err(Error::Data(_))));

        let doc = r#"{"nodes": {"1": {"lat": 0.0, "lon": 0.0}},
                      "edges": [{"source": 1, "target": -4, "weight": 1.0}]}"#;
        assert!(matches!(parse_graph(doc), Err(Error::Data(_))));
    }

    #[test]
    fn test_rejects_undeclared_endpoint() {
        let doc = r#"{"nodes": {"1": {"lat": 0.0, "lon": 0.0}},
                      "edges": [{"source": "1", "target": "2", "weight": 1.0}]}"#;
        assert!(matches!(parse_graph(doc), Err(Error::Data(_))));
    }

    #[test]
    fn test_rejects_keys_naming_the_same_node() {
        let doc = r#"{"nodes": {"1": {"lat": 10.0, "lon": 0.0},
                                "01": {"lat": 20.0, "lon": 0.0},
                                " 1": {"lat": 30.0, "lon": 0.0}},
                      "edges": []}"#;
        match parse_graph(doc) {
            Err(Error::Data(message)) => assert!(message.contains("declared more than once"), "{}", message),
            other => panic!("expected a data error, got {:?}", other.map(|g| g.node_count())),
        }
    }

    #[test]
    fn test_rejects_negative_weight() {
        let doc = r#"{"nodes": {"1": {"lat": 0.0, "lon": 0.0}, "2": {"lat": 0.0, "lon": 1.0}},
                      "edges": [{"source": "1", "target": "2", "weight": -3.0}]}"#;
        assert!(matches!(parse_graph(doc), Err(Error::Data(_))));
    }

    #[test]
    fn test_rejects_empty_and_malformed_documents() {
        assert!(matches!(parse_graph(r#"{"nodes": {}, "edges": []}"#), Err(Error::Data(_))));
        assert!(matches!(parse_graph(r#"{"nodes": {"1": {"lat": 0.0}}, "edges": []}"#), Err(Error::Json(_))));
        assert!(matches!(parse_graph("not json"), Err(Error::Json(_))));
        assert!(matches!(parse_graph(r#"{"edges": []}"#), Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_graph("/definitely/not/here/graph_data.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}

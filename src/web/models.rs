use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::graph::{Coordinates, Node, NodeId};

/// A node as listed by `/api/nodes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSummary {
    pub id: NodeId,
    pub lat: f64,
    pub lon: f64,
}

impl From<Node> for NodeSummary {
    fn from(node: Node) -> Self {
        NodeSummary {
            id: node.id,
            lat: node.lat,
            lon: node.lon,
        }
    }
}

/// Query string of `/api/shortest_path`. Both ids arrive as raw text so that
/// bad input is reported by the service's own validation.
#[derive(Debug, Deserialize)]
pub struct ShortestPathQuery {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
}

/// Response of `/api/shortest_path`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortestPathResponse {
    pub coords: Vec<Coordinates>,
    pub distance: f64,
    pub query_id: Uuid,
}

/// Response of `/api/reload`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub nodes: usize,
    pub edges: usize,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

//! Road Router - shortest paths over static road networks
//!
//! This library answers point-to-point routing queries over a weighted, directed
//! road graph that is built once at startup and shared read-only afterwards.
//! Queries run Dijkstra's algorithm with early exit at the target, and the path is
//! rebuilt from predecessor links recorded during relaxation.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod loader;
pub mod service;
pub mod web;

pub use algorithm::{
    dijkstra::Dijkstra, CancellationToken, Route, SearchLimits, ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::{Coordinates, Edge, Node, NodeId, RoadGraph};
pub use service::{RouteResponse, RouteService};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("No path found from node {from} to node {to}")]
    NoPathFound { from: NodeId, to: NodeId },

    #[error("Corrupted search state: {0}")]
    CorruptedState(String),

    #[error("Invalid graph data: {0}")]
    Data(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Query deadline exceeded")]
    DeadlineExceeded,

    #[error("Query cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

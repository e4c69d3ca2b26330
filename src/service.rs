use log::{debug, info};
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use crate::algorithm::{SearchLimits, ShortestPathAlgorithm};
use crate::algorithm::dijkstra::Dijkstra;
use crate::graph::{Coordinates, Graph, Node, NodeId, RoadGraph};
use crate::{Error, Result};

/// Successful answer to a routing query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    /// Positions of the path nodes, source first
    pub coords: Vec<Coordinates>,

    /// Total cost of the path, in the unit of the edge weights
    pub distance: f64,
}

/// Answers routing queries against the current graph snapshot.
///
/// The graph itself is never mutated. A reload swaps in a complete replacement
/// and queries that already hold a snapshot keep using it.
#[derive(Debug)]
pub struct RouteService {
    graph: RwLock<Arc<RoadGraph<f64>>>,
    engine: Dijkstra,
    query_timeout: Option<Duration>,
}

impl RouteService {
    /// Wraps `graph` for serving. Every node must have coordinates, otherwise a
    /// route through it could not be answered.
    pub fn new(graph: RoadGraph<f64>) -> Result<Self> {
        ensure_placed(&graph)?;
        Ok(RouteService {
            graph: RwLock::new(Arc::new(graph)),
            engine: Dijkstra::new(),
            query_timeout: None,
        })
    }

    /// Bound every query to `timeout`; `None` lets queries run to completion
    pub fn with_query_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn query_timeout(&self) -> Option<Duration> {
        self.query_timeout
    }

    /// The graph new queries will run against
    pub fn snapshot(&self) -> Arc<RoadGraph<f64>> {
        self.graph
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Atomically replaces the graph used by subsequent queries.
    ///
    /// A graph rejected by the same checks as `new` leaves the current one in place.
    pub fn replace_graph(&self, graph: RoadGraph<f64>) -> Result<()> {
        ensure_placed(&graph)?;
        let replacement = Arc::new(graph);
        info!(
            "Swapping road graph: {} nodes, {} edges",
            replacement.node_count(),
            replacement.edge_count()
        );
        *self.graph.write().unwrap_or_else(PoisonError::into_inner) = replacement;
        Ok(())
    }

    /// Parses a node id supplied by a client
    pub fn parse_node_id(raw: &str) -> Result<NodeId> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::Validation("node id is required".to_string()));
        }
        trimmed
            .parse::<NodeId>()
            .map_err(|_| Error::Validation(format!("node id {:?} is not a non-negative integer", raw)))
    }

    /// All nodes with coordinates, sorted by id
    pub fn nodes(&self) -> Vec<Node> {
        self.snapshot().nodes().collect()
    }

    /// Shortest path between two client-supplied ids
    pub fn shortest_path_str(&self, source: &str, target: &str) -> Result<RouteResponse> {
        let source = Self::parse_node_id(source)?;
        let target = Self::parse_node_id(target)?;
        self.shortest_path(source, target)
    }

    /// Shortest path under the configured query timeout
    pub fn shortest_path(&self, source: NodeId, target: NodeId) -> Result<RouteResponse> {
        let limits = match self.query_timeout {
            Some(timeout) => SearchLimits::none().with_timeout(timeout),
            None => SearchLimits::none(),
        };
        self.shortest_path_with_limits(source, target, &limits)
    }

    /// Shortest path under caller-supplied limits
    pub fn shortest_path_with_limits(
        &self,
        source: NodeId,
        target: NodeId,
        limits: &SearchLimits,
    ) -> Result<RouteResponse> {
        let graph = self.snapshot();
        let started = Instant::now();

        let result = self
            .engine
            .compute_with_limits(graph.as_ref(), source, target, limits)
            .and_then(|route| {
                let coords = route
                    .path
                    .iter()
                    .map(|&node| {
                        graph.coordinates(node).map_err(|_| {
                            Error::CorruptedState(format!("path node {} has no coordinates", node))
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(RouteResponse {
                    coords,
                    distance: route.distance,
                })
            });

        match &result {
            Ok(response) => debug!(
                "route {} -> {}: {} nodes, distance {:.3} in {:?}",
                source,
                target,
                response.coords.len(),
                response.distance,
                started.elapsed()
            ),
            Err(e) => debug!("route {} -> {} failed: {}", source, target, e),
        }

        result
    }
}

fn ensure_placed(graph: &RoadGraph<f64>) -> Result<()> {
    let unplaced = graph.unplaced_nodes();
    match unplaced.first() {
        None => Ok(()),
        Some(first) => Err(Error::Data(format!(
            "{} node(s) have no coordinates, first is {}",
            unplaced.len(),
            first
        ))),
    }
}

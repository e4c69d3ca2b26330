use log::debug;
use num_traits::Float;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;

use crate::graph::traits::Graph;
use crate::graph::types::{Coordinates, Edge, Node, NodeId};
use crate::{Error, Result};

/// A road network stored as adjacency lists keyed by source node
#[derive(Debug, Clone)]
pub struct RoadGraph<W>
where
    W: Float + Debug,
{
    /// Outgoing edges for each node: node_id -> [(target_node, weight)]
    adjacency: HashMap<NodeId, Vec<(NodeId, W)>>,

    /// Coordinates of every listed node, ordered by id
    coordinates: BTreeMap<NodeId, Coordinates>,

    /// Number of distinct (source, target) pairs
    edge_count: usize,
}

impl<W> RoadGraph<W>
where
    W: Float + Debug,
{
    /// Builds the graph from a node list and an edge list.
    ///
    /// Edge endpoints missing from `nodes` still become queryable nodes, they
    /// just have no coordinates. When two edges share the same `(source, target)`
    /// pair the later weight wins.
    pub fn build<N, E>(nodes: N, edges: E) -> Result<Self>
    where
        N: IntoIterator<Item = Node>,
        E: IntoIterator<Item = Edge<W>>,
    {
        let mut graph = RoadGraph {
            adjacency: HashMap::new(),
            coordinates: BTreeMap::new(),
            edge_count: 0,
        };

        for node in nodes {
            let coords = node.coordinates();
            if !coords.is_finite() {
                return Err(Error::Data(format!(
                    "node {} has non-finite coordinates ({}, {})",
                    node.id, node.lat, node.lon
                )));
            }
            graph.coordinates.insert(node.id, coords);
            graph.adjacency.entry(node.id).or_default();
        }

        let mut overwritten = 0usize;
        for edge in edges {
            if !edge.weight.is_finite() || edge.weight < W::zero() {
                return Err(Error::Data(format!(
                    "edge {} -> {} has invalid weight {:?}",
                    edge.source, edge.target, edge.weight
                )));
            }
            if graph.insert_edge(edge) {
                overwritten += 1;
            }
        }

        if overwritten > 0 {
            debug!("{} duplicate edges overwrote an earlier weight", overwritten);
        }

        Ok(graph)
    }

    /// Inserts an edge, returns true if it replaced an existing weight
    fn insert_edge(&mut self, edge: Edge<W>) -> bool {
        self.adjacency.entry(edge.target).or_default();
        let outgoing = self.adjacency.entry(edge.source).or_default();

        if let Some(existing) = outgoing.iter_mut().find(|(target, _)| *target == edge.target) {
            existing.1 = edge.weight;
            return true;
        }

        outgoing.push((edge.target, edge.weight));
        self.edge_count += 1;
        false
    }

    /// Iterates over all nodes with known coordinates, in ascending id order
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.coordinates
            .iter()
            .map(|(&id, coords)| Node::new(id, coords.lat, coords.lon))
    }

    /// Nodes that only appear as edge endpoints, in ascending id order
    pub fn unplaced_nodes(&self) -> Vec<NodeId> {
        let mut unplaced: Vec<NodeId> = self
            .adjacency
            .keys()
            .filter(|id| !self.coordinates.contains_key(id))
            .copied()
            .collect();
        unplaced.sort_unstable();
        unplaced
    }

    /// Gets the weight of an edge if it exists
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<W> {
        self.adjacency
            .get(&from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }
}

impl<W> Graph<W> for RoadGraph<W>
where
    W: Float + Debug + Send + Sync,
{
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn has_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    fn neighbors(&self, node: NodeId) -> Result<&[(NodeId, W)]> {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .ok_or(Error::NodeNotFound(node))
    }

    fn coordinates(&self, node: NodeId) -> Result<Coordinates> {
        self.coordinates
            .get(&node)
            .copied()
            .ok_or(Error::NodeNotFound(node))
    }
}

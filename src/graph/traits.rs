use std::fmt::Debug;
use num_traits::Float;

use crate::graph::types::{Coordinates, NodeId};
use crate::Result;

/// Trait representing a read-only weighted directed road graph
///
/// Implementations are never mutated once built, so a single instance can be
/// shared by any number of concurrent readers.
pub trait Graph<W>: Debug + Send + Sync
where
    W: Float + Debug,
{
    /// Returns the number of nodes in the graph (edge-only endpoints included)
    fn node_count(&self) -> usize;

    /// Returns the number of distinct directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the node was inserted, as a listed node or as an edge endpoint
    fn has_node(&self, node: NodeId) -> bool;

    /// Returns the outgoing `(neighbor, weight)` pairs of a node, in insertion order.
    /// Each neighbor appears at most once.
    fn neighbors(&self, node: NodeId) -> Result<&[(NodeId, W)]>;

    /// Returns the geographic position of a node
    fn coordinates(&self, node: NodeId) -> Result<Coordinates>;
}

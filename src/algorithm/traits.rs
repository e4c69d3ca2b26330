use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use num_traits::Float;

use crate::algorithm::limits::SearchLimits;
use crate::algorithm::reconstruct::reconstruct_path;
use crate::graph::{Graph, NodeId};
use crate::Result;

/// A point-to-point shortest path
#[derive(Debug, Clone, PartialEq)]
pub struct Route<W>
where
    W: Float + Debug,
{
    /// Nodes from source to target, both included
    pub path: Vec<NodeId>,

    /// Sum of the edge weights along `path`
    pub distance: W,
}

/// Raw output of a single-source search
#[derive(Debug, Clone)]
pub struct SearchState<W>
where
    W: Float + Debug,
{
    /// Source node of the search
    pub source: NodeId,

    /// Best known distance for every node reached so far
    pub distances: HashMap<NodeId, W>,

    /// Predecessor on the best known path, recorded when the edge was relaxed
    pub predecessors: HashMap<NodeId, NodeId>,

    /// Finalized nodes, in finalization order, with their distance at that moment
    pub settled: Vec<(NodeId, W)>,

    finalized: HashSet<NodeId>,
}

impl<W> SearchState<W>
where
    W: Float + Debug,
{
    pub(crate) fn new(source: NodeId) -> Self {
        let mut distances = HashMap::new();
        distances.insert(source, W::zero());
        SearchState {
            source,
            distances,
            predecessors: HashMap::new(),
            settled: Vec::new(),
            finalized: HashSet::new(),
        }
    }

    /// Marks `node` as finalized, returns false if it already was
    pub(crate) fn finalize(&mut self, node: NodeId, distance: W) -> bool {
        if !self.finalized.insert(node) {
            return false;
        }
        self.settled.push((node, distance));
        true
    }

    /// Returns true once the shortest distance to `node` is proven
    pub fn is_settled(&self, node: NodeId) -> bool {
        self.finalized.contains(&node)
    }

    /// Shortest distance to `node`, if it has been finalized
    pub fn distance(&self, node: NodeId) -> Option<W> {
        if self.is_settled(node) {
            self.distances.get(&node).copied()
        } else {
            None
        }
    }

    /// Rebuilds the path to a finalized node. `bound` is the graph's node count.
    pub fn path_to(&self, target: NodeId, bound: usize) -> Result<Vec<NodeId>> {
        reconstruct_path(&self.predecessors, self.source, target, bound)
    }
}

/// Trait for point-to-point shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Debug,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute the shortest path from `source` to `target`, giving up when `limits` say so
    fn compute_with_limits(
        &self,
        graph: &G,
        source: NodeId,
        target: NodeId,
        limits: &SearchLimits,
    ) -> Result<Route<W>>;

    /// Compute the shortest path from `source` to `target` without any limit
    fn compute(&self, graph: &G, source: NodeId, target: NodeId) -> Result<Route<W>> {
        self.compute_with_limits(graph, source, target, &SearchLimits::none())
    }
}

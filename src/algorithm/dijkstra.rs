use log::debug;
use num_traits::Float;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

use crate::algorithm::{Route, SearchLimits, SearchState, ShortestPathAlgorithm};
use crate::data_structures::MinPriorityQueue;
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// Queue pops between two checks of the search limits
const LIMIT_CHECK_INTERVAL: usize = 256;

/// Classic Dijkstra's algorithm with early exit at the target
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Runs the search from `source`.
    ///
    /// Stops as soon as `target` is finalized, or explores everything reachable
    /// when `target` is `None`. Predecessors are recorded at relaxation time.
    pub fn search<W, G>(
        &self,
        graph: &G,
        source: NodeId,
        target: Option<NodeId>,
        limits: &SearchLimits,
    ) -> Result<SearchState<W>>
    where
        W: Float + Debug,
        G: Graph<W>,
    {
        if !graph.has_node(source) {
            return Err(Error::NodeNotFound(source));
        }
        limits.check()?;

        let mut state = SearchState::new(source);
        let mut queue = MinPriorityQueue::new();
        queue.push(source, OrderedFloat(W::zero()));
        let mut pops = 0usize;

        while let Some((u, OrderedFloat(dist_u))) = queue.pop() {
            pops += 1;
            if pops % LIMIT_CHECK_INTERVAL == 0 {
                limits.check()?;
            }

            // Stale entry, u was finalized through a shorter path
            if !state.finalize(u, dist_u) {
                continue;
            }

            if target == Some(u) {
                break;
            }

            for &(v, weight) in graph.neighbors(u)? {
                let new_dist = dist_u + weight;
                if !new_dist.is_finite() {
                    return Err(Error::Data(format!(
                        "distance to node {} via {} overflows",
                        v, u
                    )));
                }

                let should_update = match state.distances.get(&v) {
                    None => true,
                    Some(&current_dist) => new_dist < current_dist,
                };

                if should_update {
                    state.distances.insert(v, new_dist);
                    state.predecessors.insert(v, u);
                    queue.push(v, OrderedFloat(new_dist));
                }
            }
        }

        debug!(
            "search from {} settled {} nodes after {} queue pops",
            source,
            state.settled.len(),
            pops
        );

        Ok(state)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_with_limits(
        &self,
        graph: &G,
        source: NodeId,
        target: NodeId,
        limits: &SearchLimits,
    ) -> Result<Route<W>> {
        if !graph.has_node(source) {
            return Err(Error::NodeNotFound(source));
        }
        if !graph.has_node(target) {
            return Err(Error::NodeNotFound(target));
        }

        if source == target {
            return Ok(Route {
                path: vec![source],
                distance: W::zero(),
            });
        }

        let state = self.search(graph, source, Some(target), limits)?;

        let distance = state
            .distance(target)
            .ok_or(Error::NoPathFound { from: source, to: target })?;
        let path = state.path_to(target, graph.node_count())?;

        Ok(Route { path, distance })
    }
}

use std::collections::HashMap;

use crate::graph::NodeId;
use crate::{Error, Result};

/// Walks predecessor links from `target` back to `source` and returns the path
/// in source-to-target order.
///
/// `bound` is the number of nodes in the graph. A walk longer than that can only
/// come from a cycle in the predecessor table, which is reported as
/// `CorruptedState` instead of looping forever. So is a chain that ends before
/// reaching `source`.
pub fn reconstruct_path(
    predecessors: &HashMap<NodeId, NodeId>,
    source: NodeId,
    target: NodeId,
    bound: usize,
) -> Result<Vec<NodeId>> {
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        let pred = match predecessors.get(&current) {
            Some(&pred) => pred,
            None => {
                return Err(Error::CorruptedState(format!(
                    "node {} has no predecessor on the path from {} to {}",
                    current, source, target
                )));
            }
        };

        path.push(pred);
        if path.len() > bound {
            return Err(Error::CorruptedState(format!(
                "path from {} to {} is longer than the graph ({} nodes)",
                source, target, bound
            )));
        }
        current = pred;
    }

    path.reverse();
    Ok(path)
}

//! Generation levels by longest-path propagation.
//!
//! Roots start at level 0. A worklist pushes levels forward along edges
//! and re-enqueues a successor whenever its level is raised, so the fixed
//! point is the length of the longest root-to-node path. Diamonds resolve
//! to the deeper branch.
//!
//! In an acyclic graph of `n` addresses no level can exceed `n - 1`. Any
//! attempt to raise past that bound means the worklist is chasing a cycle,
//! and the assignment stops with [`LineageError::CyclicLineage`]. Each
//! address can be raised at most `n` times, so the work stays bounded.

use crate::graph::{LineageGraph, NodeId};
use lineage_core::{LineageError, Result};
use std::collections::{HashMap, VecDeque};
use tracing::{debug, warn};

/// Generation level of every address in a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Levels {
    best: HashMap<NodeId, usize>,
    max_level: usize,
}

impl Levels {
    /// Level of a node. Nodes never reached default to 0.
    pub fn get(&self, index: NodeId) -> usize {
        self.best.get(&index).copied().unwrap_or(0)
    }

    /// Highest level in the graph, 0 for an empty graph.
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}

/// Assigns a generation level to every address.
///
/// Fails with `CyclicLineage` if the transfers contain a cycle, either one
/// reachable from a root (caught by the level bound) or one with no root
/// leading into it (caught by nodes left unreached).
pub fn assign_levels(graph: &LineageGraph) -> Result<Levels> {
    let bound = graph.node_count().saturating_sub(1);
    let mut best: HashMap<NodeId, usize> = HashMap::with_capacity(graph.node_count());
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    for root in graph.roots() {
        best.insert(root, 0);
        queue.push_back(root);
    }

    while let Some(current) = queue.pop_front() {
        let candidate = best.get(&current).copied().unwrap_or(0) + 1;

        for child in graph.successors(current) {
            if best.get(&child).is_some_and(|&level| level >= candidate) {
                continue;
            }
            if candidate > bound {
                return Err(cyclic(graph, child, bound));
            }
            best.insert(child, candidate);
            queue.push_back(child);
        }
    }

    // Every node of a DAG is reachable from some root.
    if let Some(unreached) = graph.node_indexes().find(|idx| !best.contains_key(idx)) {
        return Err(cyclic(graph, unreached, bound));
    }

    let max_level = best.values().copied().max().unwrap_or(0);
    debug!(
        "Assigned levels to {} addresses (max level {})",
        best.len(),
        max_level
    );

    Ok(Levels { best, max_level })
}

fn cyclic(graph: &LineageGraph, index: NodeId, bound: usize) -> LineageError {
    let address = graph.address(index).unwrap_or_default().to_string();
    warn!("Cyclic lineage at {}", address);
    LineageError::CyclicLineage { address, bound }
}

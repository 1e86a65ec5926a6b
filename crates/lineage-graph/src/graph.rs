//! Core graph data structure.
//!
//! The LineageGraph wraps petgraph and adds an address index so every
//! stage after ingest can move between addresses and node indexes cheaply.
//! Node indexes follow the order in which addresses were first seen, which
//! is the order the layout uses within a generation.

use crate::edge::Transfer;
use lineage_core::Address;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashMap, HashSet};

/// Unique identifier for an address in the graph.
pub type NodeId = NodeIndex;

/// Address set plus forward and reverse adjacency.
///
/// One petgraph edge exists per transfer record; parallel edges between
/// the same pair of addresses are kept, and the neighbour queries below
/// collapse them to set semantics.
#[derive(Debug, Clone, Default)]
pub struct LineageGraph {
    pub(crate) graph: DiGraph<Address, Transfer>,

    /// Maps addresses to graph node indexes.
    id_index: HashMap<Address, NodeId>,
}

impl LineageGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an address if it is not present yet and returns its index.
    pub fn ensure_address(&mut self, address: &str) -> NodeId {
        if let Some(&index) = self.id_index.get(address) {
            return index;
        }
        let index = self.graph.add_node(address.to_string());
        self.id_index.insert(address.to_string(), index);
        index
    }

    /// Adds a hand-off edge. `from` is the predecessor.
    pub fn add_transfer(&mut self, from: NodeId, to: NodeId, transfer: Transfer) {
        self.graph.add_edge(from, to, transfer);
    }

    /// Gets the node index for an address.
    pub fn get_index(&self, address: &str) -> Option<NodeId> {
        self.id_index.get(address).copied()
    }

    /// Gets the address stored at a node index.
    pub fn address(&self, index: NodeId) -> Option<&str> {
        self.graph.node_weight(index).map(String::as_str)
    }

    /// Iterates over all node indexes in first-seen order.
    pub fn node_indexes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_indices()
    }

    /// Iterates over all addresses in first-seen order.
    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Iterates over all transfer edges as `(from, to, transfer)`.
    pub fn transfers(&self) -> impl Iterator<Item = (NodeId, NodeId, &Transfer)> {
        self.graph
            .edge_references()
            .map(|edge_ref| (edge_ref.source(), edge_ref.target(), edge_ref.weight()))
    }

    /// Direct successors of a node, without duplicates.
    pub fn successors(&self, index: NodeId) -> Vec<NodeId> {
        self.neighbors(index, Direction::Outgoing)
    }

    /// Direct predecessors of a node, without duplicates.
    pub fn predecessors(&self, index: NodeId) -> Vec<NodeId> {
        self.neighbors(index, Direction::Incoming)
    }

    /// Whether any transfer ends at this node.
    pub fn has_predecessors(&self, index: NodeId) -> bool {
        self.graph
            .neighbors_directed(index, Direction::Incoming)
            .next()
            .is_some()
    }

    /// Whether any transfer starts at this node.
    pub fn has_successors(&self, index: NodeId) -> bool {
        self.graph
            .neighbors_directed(index, Direction::Outgoing)
            .next()
            .is_some()
    }

    /// Addresses with no incoming transfer, in first-seen order.
    pub fn roots(&self) -> Vec<NodeId> {
        self.node_indexes()
            .filter(|&idx| !self.has_predecessors(idx))
            .collect()
    }

    /// Returns the number of addresses.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of transfer edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn neighbors(&self, index: NodeId, direction: Direction) -> Vec<NodeId> {
        // petgraph yields the most recently added edge first
        let mut ordered: Vec<NodeId> = self.graph.neighbors_directed(index, direction).collect();
        ordered.reverse();

        let mut seen = HashSet::new();
        ordered.retain(|idx| seen.insert(*idx));
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_address_is_idempotent() {
        let mut graph = LineageGraph::new();
        let a = graph.ensure_address("0xA");
        let again = graph.ensure_address("0xA");
        assert_eq!(a, again);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.address(a), Some("0xA"));
    }

    #[test]
    fn test_parallel_transfers_collapse_in_neighbours() {
        let mut graph = LineageGraph::new();
        let a = graph.ensure_address("0xA");
        let b = graph.ensure_address("0xB");
        graph.add_transfer(a, b, Transfer::new("s1"));
        graph.add_transfer(a, b, Transfer::new("s2"));

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.successors(a), vec![b]);
        assert_eq!(graph.predecessors(b), vec![a]);
        assert!(graph.predecessors(a).is_empty());
    }

    #[test]
    fn test_successors_keep_insertion_order() {
        let mut graph = LineageGraph::new();
        let a = graph.ensure_address("0xA");
        let b = graph.ensure_address("0xB");
        let c = graph.ensure_address("0xC");
        graph.add_transfer(a, b, Transfer::new("s1"));
        graph.add_transfer(a, c, Transfer::new("s1"));

        assert_eq!(graph.successors(a), vec![b, c]);
    }

    #[test]
    fn test_roots() {
        let mut graph = LineageGraph::new();
        let a = graph.ensure_address("0xA");
        let b = graph.ensure_address("0xB");
        let lonely = graph.ensure_address("0xZ");
        graph.add_transfer(a, b, Transfer::new("s1"));

        assert_eq!(graph.roots(), vec![a, lonely]);
    }
}

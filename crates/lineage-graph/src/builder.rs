//! Graph builder for constructing the lineage graph from raw records.
//!
//! The builder collects the address set from asset owners and transfer
//! endpoints, and turns every transfer into a directed edge.

use crate::edge::Transfer;
use crate::graph::LineageGraph;
use lineage_core::{Asset, Ledger, TransferRecord};
use tracing::debug;

/// Builds a LineageGraph from assets and transfers.
///
/// Addresses are registered in the order they are first seen: asset owners
/// first, then the sender and recipient of each transfer in record order.
pub struct GraphBuilder {
    graph: LineageGraph,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            graph: LineageGraph::new(),
        }
    }

    /// Registers the owner of every asset.
    pub fn add_assets(&mut self, assets: &[Asset]) -> &mut Self {
        for asset in assets {
            self.graph.ensure_address(&asset.owner_address);
        }
        self
    }

    /// Registers both endpoints of every transfer and adds one edge each.
    pub fn add_transfers(&mut self, transfers: &[TransferRecord]) -> &mut Self {
        for record in transfers {
            let from = self.graph.ensure_address(&record.from_address);
            let to = self.graph.ensure_address(&record.to_address);
            self.graph.add_transfer(
                from,
                to,
                Transfer {
                    asset_id: record.asset_id.clone(),
                    timestamp: record.timestamp,
                },
            );
        }
        self
    }

    /// Finishes building and returns the graph.
    pub fn build(self) -> LineageGraph {
        debug!(
            "Ingested {} addresses and {} transfers",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        self.graph
    }
}

/// Builds the graph for a whole ledger.
pub fn ingest(assets: &[Asset], transfers: &[TransferRecord]) -> LineageGraph {
    let mut builder = GraphBuilder::new();
    builder.add_assets(assets).add_transfers(transfers);
    builder.build()
}

impl From<&Ledger> for LineageGraph {
    fn from(ledger: &Ledger) -> Self {
        ingest(&ledger.assets, &ledger.transfers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_owners_and_endpoints() {
        let assets = vec![Asset::new("s1", "Notes", "0xA")];
        let transfers = vec![
            TransferRecord::new("s1", "0xA", "0xB"),
            TransferRecord::new("s2", "0xC", "0xD"),
        ];

        let graph = ingest(&assets, &transfers);

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 2);
        let order: Vec<&str> = graph.addresses().collect();
        assert_eq!(order, vec!["0xA", "0xB", "0xC", "0xD"]);
    }

    #[test]
    fn test_owner_without_transfers_is_isolated() {
        let assets = vec![Asset::new("s1", "Notes", "0xX")];
        let graph = ingest(&assets, &[]);

        let x = graph.get_index("0xX").unwrap();
        assert!(!graph.has_predecessors(x));
        assert!(!graph.has_successors(x));
    }

    #[test]
    fn test_adjacency_follows_transfer_direction() {
        let transfers = vec![TransferRecord::new("s1", "0xA", "0xB")];
        let graph = ingest(&[], &transfers);

        let a = graph.get_index("0xA").unwrap();
        let b = graph.get_index("0xB").unwrap();
        assert_eq!(graph.successors(a), vec![b]);
        assert_eq!(graph.predecessors(b), vec![a]);
        assert!(graph.successors(b).is_empty());
    }

    #[test]
    fn test_edges_keep_asset_ids() {
        let transfers = vec![TransferRecord::new("s9", "0xA", "0xB").at(11)];
        let graph = ingest(&[], &transfers);

        let (_, _, transfer) = graph.transfers().next().unwrap();
        assert_eq!(transfer.asset_id, "s9");
        assert_eq!(transfer.timestamp, 11);
    }

    #[test]
    fn test_empty_input() {
        let graph = LineageGraph::from(&Ledger::default());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}

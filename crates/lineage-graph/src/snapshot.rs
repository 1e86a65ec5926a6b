//! The immutable graph snapshot handed to renderers.
//!
//! A snapshot is rebuilt wholesale from the input records: ingest, level
//! assignment, classification, layout and labelling run once, in that
//! order, and the result is never mutated afterwards.

use crate::builder::ingest;
use crate::edge::{Edge, EdgeSegment};
use crate::layout::{layout, segment_endpoints, Position};
use crate::labels::label_for;
use crate::levels::assign_levels;
use crate::role::{classify, Role};
use lineage_core::{Address, Asset, Ledger, LineageConfig, Result, TransferRecord};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// A positioned, classified address.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub address: Address,
    pub level: usize,
    pub role: Role,
    pub x: f64,
    pub y: f64,
    /// Title of the first asset this address owns, or the placeholder.
    pub display_title: String,
}

impl Node {
    pub fn position(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }
}

/// Everything a renderer needs to draw the lineage forest.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSnapshot {
    /// Nodes in first-seen address order.
    pub nodes: Vec<Node>,

    /// One edge per transfer record, in record order.
    pub edges: Vec<Edge>,

    /// Maps addresses to positions in `nodes`.
    #[serde(skip)]
    pub node_by_address: HashMap<Address, usize>,

    pub label_by_address: BTreeMap<Address, String>,

    pub max_level: usize,

    /// Addresses with no incoming transfer.
    pub root_count: usize,
}

/// Headline numbers for a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSummary {
    pub total_nodes: usize,
    pub total_links: usize,
    /// Number of generations, `max_level + 1`.
    pub max_depth: usize,
    pub chains: usize,
}

impl GraphSnapshot {
    /// Builds a snapshot from raw records.
    ///
    /// Fails only if the transfers form a cycle.
    pub fn build(
        assets: &[Asset],
        transfers: &[TransferRecord],
        placeholder_title: &str,
    ) -> Result<Self> {
        let graph = ingest(assets, transfers);
        let levels = assign_levels(&graph)?;
        let positions = layout(&graph, &levels);

        let mut titles: HashMap<&str, &str> = HashMap::new();
        for asset in assets {
            titles
                .entry(asset.owner_address.as_str())
                .or_insert(asset.title.as_str());
        }

        let mut nodes = Vec::with_capacity(graph.node_count());
        let mut node_by_address = HashMap::with_capacity(graph.node_count());
        let mut label_by_address = BTreeMap::new();
        let mut root_count = 0;

        for (i, index) in graph.node_indexes().enumerate() {
            let address = graph.address(index).unwrap_or_default().to_string();
            let role = classify(&graph, index);
            if role == Role::Root {
                root_count += 1;
            }
            let position = positions.get(&index).copied().unwrap_or_default();

            label_by_address.insert(address.clone(), label_for(i, &address));
            node_by_address.insert(address.clone(), i);
            nodes.push(Node {
                display_title: titles
                    .get(address.as_str())
                    .copied()
                    .unwrap_or(placeholder_title)
                    .to_string(),
                address,
                level: levels.get(index),
                role,
                x: position.x,
                y: position.y,
            });
        }

        let edges = transfers
            .iter()
            .map(|record| Edge {
                from_address: record.from_address.clone(),
                to_address: record.to_address.clone(),
            })
            .collect();

        debug!(
            "Built snapshot: {} nodes, {} roots, max level {}",
            nodes.len(),
            root_count,
            levels.max_level()
        );

        Ok(Self {
            nodes,
            edges,
            node_by_address,
            label_by_address,
            max_level: levels.max_level(),
            root_count,
        })
    }

    /// Builds a snapshot for a ledger using the configured placeholder title.
    pub fn from_ledger(ledger: &Ledger, config: &LineageConfig) -> Result<Self> {
        Self::build(&ledger.assets, &ledger.transfers, &config.placeholder_title)
    }

    /// Gets a node by address.
    pub fn node(&self, address: &str) -> Option<&Node> {
        let position = self.node_by_address.get(address)?;
        self.nodes.get(*position)
    }

    /// Gets the display label for an address.
    pub fn label(&self, address: &str) -> Option<&str> {
        self.label_by_address.get(address).map(String::as_str)
    }

    /// Resolves every edge to canvas coordinates.
    ///
    /// Edges whose endpoints have no node are skipped.
    pub fn edge_segments(&self) -> Vec<EdgeSegment> {
        self.edges
            .iter()
            .filter_map(|edge| {
                let (Some(from), Some(to)) =
                    (self.node(&edge.from_address), self.node(&edge.to_address))
                else {
                    warn!(
                        "Skipping edge {} -> {}: endpoint not in snapshot",
                        edge.from_address, edge.to_address
                    );
                    return None;
                };
                let (start, end) = segment_endpoints(from.position(), to.position());
                Some(EdgeSegment {
                    from_address: edge.from_address.clone(),
                    to_address: edge.to_address.clone(),
                    x1: start.x,
                    y1: start.y,
                    x2: end.x,
                    y2: end.y,
                })
            })
            .collect()
    }

    /// Nodes grouped by level, each group in snapshot order.
    pub fn level_groups(&self) -> BTreeMap<usize, Vec<&Node>> {
        let mut groups: BTreeMap<usize, Vec<&Node>> = BTreeMap::new();
        for node in &self.nodes {
            groups.entry(node.level).or_default().push(node);
        }
        groups
    }

    /// Iterates over nodes with the given role.
    pub fn nodes_with_role(&self, role: Role) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |node| node.role == role)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            total_nodes: self.node_count(),
            total_links: self.edge_count(),
            max_depth: self.max_level + 1,
            chains: self.root_count,
        }
    }
}

//! Node roles within a lineage.
//!
//! A role depends only on whether an address has incoming and outgoing
//! transfers. The root check comes first, so an isolated address is a root.

use crate::graph::{LineageGraph, NodeId};
use serde::{Deserialize, Serialize};

/// Position of an address within its chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// No incoming transfer. Starts a chain.
    Root,

    /// Has both received and passed on.
    Intermediate,

    /// Received but never passed on.
    Leaf,
}

/// Title and description shown when hovering a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleInfo {
    pub title: &'static str,
    pub description: &'static str,
}

impl Role {
    /// Classifies an address from its adjacency.
    pub fn classify(has_predecessors: bool, has_successors: bool) -> Self {
        match (has_predecessors, has_successors) {
            (false, _) => Role::Root,
            (true, true) => Role::Intermediate,
            (true, false) => Role::Leaf,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Root => "root",
            Role::Intermediate => "intermediate",
            Role::Leaf => "leaf",
        }
    }

    /// Legend text for this role.
    pub fn legend(&self) -> &'static str {
        match self {
            Role::Root => "Root (Originator)",
            Role::Intermediate => "Intermediate (Re-inherited)",
            Role::Leaf => "Leaf (Final recipient)",
        }
    }

    /// Fill colour used when drawing the node.
    pub fn color(&self) -> &'static str {
        match self {
            Role::Root => "rgb(96, 165, 250)",
            Role::Intermediate => "rgb(167, 139, 250)",
            Role::Leaf => "rgb(52, 211, 153)",
        }
    }

    pub fn info(&self) -> RoleInfo {
        match self {
            Role::Root => RoleInfo {
                title: "Originator",
                description: "Primary steward of the lineage. Seeds the vault handoff and initiates the chain.",
            },
            Role::Intermediate => RoleInfo {
                title: "Successor",
                description: "Active steward who inherits and reissues the vault to trusted co-stewards.",
            },
            Role::Leaf => RoleInfo {
                title: "Vault Recipient",
                description: "Latest guardian of the craft secret. Holds custodial access until new successors are nominated.",
            },
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies a single node of the graph.
pub fn classify(graph: &LineageGraph, index: NodeId) -> Role {
    Role::classify(graph.has_predecessors(index), graph.has_successors(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ingest;
    use lineage_core::{Asset, TransferRecord};

    #[test]
    fn test_truth_table() {
        assert_eq!(Role::classify(false, false), Role::Root);
        assert_eq!(Role::classify(false, true), Role::Root);
        assert_eq!(Role::classify(true, true), Role::Intermediate);
        assert_eq!(Role::classify(true, false), Role::Leaf);
    }

    #[test]
    fn test_classify_chain() {
        let transfers = vec![
            TransferRecord::new("s1", "A", "B"),
            TransferRecord::new("s1", "B", "C"),
        ];
        let graph = ingest(&[Asset::new("s2", "Notes", "X")], &transfers);
        let role = |addr: &str| classify(&graph, graph.get_index(addr).unwrap());

        assert_eq!(role("A"), Role::Root);
        assert_eq!(role("B"), Role::Intermediate);
        assert_eq!(role("C"), Role::Leaf);
        assert_eq!(role("X"), Role::Root);
    }

    #[test]
    fn test_role_info_titles() {
        assert_eq!(Role::Root.info().title, "Originator");
        assert_eq!(Role::Intermediate.info().title, "Successor");
        assert_eq!(Role::Leaf.info().title, "Vault Recipient");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Role::Intermediate).unwrap(), "\"intermediate\"");
        assert_eq!(Role::Leaf.to_string(), "leaf");
    }
}

//! Edge types for the lineage graph.
//!
//! Each transfer record becomes one edge, whatever asset it moved.

use lineage_core::Address;
use serde::{Deserialize, Serialize};

/// Weight stored on each petgraph edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// The asset that moved along this edge.
    pub asset_id: String,

    /// When the hand-off happened, in milliseconds.
    pub timestamp: u64,
}

impl Transfer {
    pub fn new(asset_id: impl Into<String>) -> Self {
        Self {
            asset_id: asset_id.into(),
            timestamp: 0,
        }
    }
}

/// A directed hand-off between two addresses, as exposed in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub from_address: Address,
    pub to_address: Address,
}

/// An edge resolved to canvas coordinates.
///
/// The line runs from the bottom of the parent circle to the top of the
/// child circle rather than between centres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeSegment {
    pub from_address: Address,
    pub to_address: Address,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

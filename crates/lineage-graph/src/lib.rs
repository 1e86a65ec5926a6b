//! Lineage Graph - Ownership hand-off forests
//!
//! This crate rebuilds the lineage forest described by a flat list of
//! transfer records and turns it into something a renderer can draw:
//! generation levels, node roles, canvas coordinates and short labels.
//! It also computes per-address statistics and tooltip placement.
//!
//! # Architecture
//!
//! The pipeline runs once per input change and produces an immutable
//! [`GraphSnapshot`]:
//!
//! 1. [`GraphBuilder`] ingests records into a petgraph-backed [`LineageGraph`]
//! 2. [`assign_levels`] computes longest-path generation levels
//! 3. [`Role::classify`] labels roots, intermediates and leaves
//! 4. [`layout`] places nodes on a fixed 800×500 canvas
//! 5. [`label_for`] assigns display labels
//!
//! [`compute_stats`] works on the raw records and [`HoverState`] reacts to
//! pointer events against an existing snapshot.
//!
//! # Example
//!
//! ```no_run
//! use lineage_core::{Ledger, LineageConfig};
//! use lineage_graph::GraphSnapshot;
//!
//! let ledger = Ledger::sample();
//! let snapshot = GraphSnapshot::from_ledger(&ledger, &LineageConfig::default())?;
//! for node in &snapshot.nodes {
//!     println!("{} at level {}", node.address, node.level);
//! }
//! # Ok::<(), lineage_core::LineageError>(())
//! ```

mod builder;
mod edge;
mod graph;
mod labels;
mod layout;
mod levels;
mod role;
mod snapshot;
mod stats;
mod tooltip;

pub use builder::{ingest, GraphBuilder};
pub use edge::{Edge, EdgeSegment, Transfer};
pub use graph::{LineageGraph, NodeId};
pub use labels::{assign_labels, label_for, LETTER_LABELS};
pub use layout::{
    layout, level_groups, position, segment_endpoints, Position, CANVAS_HEIGHT, CANVAS_WIDTH,
    NODE_RADIUS,
};
pub use levels::{assign_levels, Levels};
pub use role::{classify, Role, RoleInfo};
pub use snapshot::{GraphSnapshot, GraphSummary, Node};
pub use stats::{compute_stats, Stats};
pub use tooltip::{
    tooltip_anchor, Anchor, Container, HoverState, Pointer, PointerEvent, Tooltip,
    TOOLTIP_HEIGHT, TOOLTIP_MARGIN, TOOLTIP_OFFSET, TOOLTIP_WIDTH,
};

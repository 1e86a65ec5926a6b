//! Deterministic layered layout on a fixed logical canvas.
//!
//! Generations are stacked top to bottom and spread evenly across the
//! width. Within a generation, nodes keep first-seen address order. The
//! canvas is always 800×500 units; scaling to the real viewport is left to
//! the renderer.

use crate::graph::{LineageGraph, NodeId};
use crate::levels::Levels;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 500.0;

/// Radius of a drawn node. Edges stop at the circle boundary.
pub const NODE_RADIUS: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Groups node indexes by level, each group in first-seen order.
pub fn level_groups(graph: &LineageGraph, levels: &Levels) -> BTreeMap<usize, Vec<NodeId>> {
    let mut groups: BTreeMap<usize, Vec<NodeId>> = BTreeMap::new();
    for index in graph.node_indexes() {
        groups.entry(levels.get(index)).or_default().push(index);
    }
    groups
}

/// Canvas position of the `index`-th node in a group of `group_size`
/// at `level`.
pub fn position(index: usize, group_size: usize, level: usize, max_level: usize) -> Position {
    let horizontal_spacing = CANVAS_WIDTH / (group_size + 1) as f64;
    let vertical_spacing = CANVAS_HEIGHT / (max_level + 2) as f64;
    Position {
        x: horizontal_spacing * (index + 1) as f64,
        y: vertical_spacing * (level + 1) as f64,
    }
}

/// Computes a position for every node in the graph.
pub fn layout(graph: &LineageGraph, levels: &Levels) -> HashMap<NodeId, Position> {
    let max_level = levels.max_level();
    let mut positions = HashMap::with_capacity(graph.node_count());

    for (level, group) in level_groups(graph, levels) {
        for (i, &node) in group.iter().enumerate() {
            positions.insert(node, position(i, group.len(), level, max_level));
        }
    }

    positions
}

/// Start and end points of the line joining a parent to a child.
pub fn segment_endpoints(parent: Position, child: Position) -> (Position, Position) {
    (
        Position {
            x: parent.x,
            y: parent.y + NODE_RADIUS,
        },
        Position {
            x: child.x,
            y: child.y - NODE_RADIUS,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ingest;
    use crate::levels::assign_levels;
    use lineage_core::TransferRecord;

    #[test]
    fn test_single_node_is_centred_horizontally() {
        let p = position(0, 1, 0, 0);
        assert_eq!(p.x, 400.0);
        assert_eq!(p.y, 250.0);
    }

    #[test]
    fn test_fan_out_positions() {
        // A → B, A → C, A → D
        let transfers = vec![
            TransferRecord::new("s1", "A", "B"),
            TransferRecord::new("s1", "A", "C"),
            TransferRecord::new("s1", "A", "D"),
        ];
        let graph = ingest(&[], &transfers);
        let levels = assign_levels(&graph).unwrap();
        let positions = layout(&graph, &levels);
        let at = |addr: &str| positions[&graph.get_index(addr).unwrap()];

        let third = 500.0 / 3.0;
        assert_eq!(at("A"), Position { x: 400.0, y: third });
        assert_eq!(at("B"), Position { x: 200.0, y: third * 2.0 });
        assert_eq!(at("C"), Position { x: 400.0, y: third * 2.0 });
        assert_eq!(at("D"), Position { x: 600.0, y: third * 2.0 });
    }

    #[test]
    fn test_group_sizes_sum_to_node_count() {
        let transfers = vec![
            TransferRecord::new("s1", "A", "B"),
            TransferRecord::new("s1", "B", "C"),
            TransferRecord::new("s2", "X", "Y"),
        ];
        let graph = ingest(&[], &transfers);
        let levels = assign_levels(&graph).unwrap();
        let groups = level_groups(&graph, &levels);

        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, graph.node_count());
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[&0].len(), 2);
    }

    #[test]
    fn test_group_order_is_first_seen() {
        let transfers = vec![
            TransferRecord::new("s1", "zeta", "b"),
            TransferRecord::new("s2", "alpha", "c"),
        ];
        let graph = ingest(&[], &transfers);
        let levels = assign_levels(&graph).unwrap();
        let groups = level_groups(&graph, &levels);

        let roots: Vec<&str> = groups[&0]
            .iter()
            .filter_map(|&idx| graph.address(idx))
            .collect();
        assert_eq!(roots, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_segment_stops_at_circle_edge() {
        let (start, end) =
            segment_endpoints(Position { x: 100.0, y: 100.0 }, Position { x: 300.0, y: 200.0 });
        assert_eq!(start, Position { x: 100.0, y: 130.0 });
        assert_eq!(end, Position { x: 300.0, y: 170.0 });
    }
}

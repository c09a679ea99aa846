//! Layout engine for roadmap graphs
//!
//! Assigns advisory 2-D coordinates to every node of a path and emits the
//! prerequisite edges. Positions are presentation-only: nothing downstream
//! treats them as authoritative.
//!
//! Levels are computed per group. A node's level is one more than the
//! deepest of its prerequisites *within the same group*; prerequisites in
//! other groups are treated as already satisfied and do not raise the level.
//! Groups stack vertically in order, each offset by the rows the previous
//! groups consumed.

use std::collections::HashMap;

use logger::debug;

use crate::core::models::{NodeGroup, RoadmapPath};

/// Horizontal distance between nodes on the same row
pub const NODE_SPACING_X: f32 = 280.0;
/// Vertical distance between rows within a group
pub const NODE_SPACING_Y: f32 = 120.0;
/// Extra vertical gap between consecutive groups
pub const GROUP_SPACING: f32 = 200.0;

/// A 2-D coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Horizontal coordinate, centered around 0 per row
    pub x: f32,
    /// Vertical coordinate, growing downward
    pub y: f32,
}

/// A node with its computed position
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    /// Node id
    pub id: String,
    /// Title of the group the node belongs to
    pub group_title: String,
    /// Prerequisite depth within the group (0 = no in-group prereqs)
    pub level: usize,
    /// Assigned coordinate
    pub position: Position,
}

/// A directed prerequisite edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEdge {
    /// Stable edge id: `"{source}-{target}"`
    pub id: String,
    /// Prerequisite node id
    pub source: String,
    /// Dependent node id
    pub target: String,
}

/// Positions and edges for one path
#[derive(Debug, Clone, Default)]
pub struct PathLayout {
    /// Every node of the path with exactly one position
    pub nodes: Vec<PlacedNode>,
    /// One edge per resolvable (prereq, node) pair
    pub edges: Vec<LayoutEdge>,
}

/// Level-computation marker used for cycle detection
#[derive(Debug, Clone, Copy)]
enum Mark {
    /// Level computation for this node is on the current recursion stack
    InProgress,
    /// Level is final
    Done(usize),
}

/// Compute positions and edges for every node of a path
#[must_use]
pub fn layout_path(path: &RoadmapPath) -> PathLayout {
    let mut layout = PathLayout::default();
    let mut y_offset = 0.0_f32;

    for group in &path.groups {
        if group.nodes.is_empty() {
            continue;
        }

        let levels = group_levels(group);
        let max_level = group.nodes.iter().map(|n| levels[&n.id]).max().unwrap_or(0);

        // Row widths first, so each row can be centered around x = 0.
        let mut row_counts: HashMap<usize, usize> = HashMap::new();
        for node in &group.nodes {
            *row_counts.entry(levels[&node.id]).or_insert(0) += 1;
        }

        #[allow(clippy::cast_precision_loss)]
        let mut placed_in_row: HashMap<usize, usize> = HashMap::new();
        for node in &group.nodes {
            let level = levels[&node.id];
            let row_len = row_counts[&level];
            let index = placed_in_row.entry(level).or_insert(0);

            #[allow(clippy::cast_precision_loss)]
            let start_x = -(row_len as f32 * NODE_SPACING_X) / 2.0;
            #[allow(clippy::cast_precision_loss)]
            let x = start_x + (*index as f32 + 0.5) * NODE_SPACING_X;
            #[allow(clippy::cast_precision_loss)]
            let y = y_offset + level as f32 * NODE_SPACING_Y;
            *index += 1;

            layout.nodes.push(PlacedNode {
                id: node.id.clone(),
                group_title: group.title.clone(),
                level,
                position: Position { x, y },
            });
        }

        #[allow(clippy::cast_precision_loss)]
        {
            y_offset += (max_level + 1) as f32 * NODE_SPACING_Y + GROUP_SPACING;
        }
    }

    // Edges resolve across the whole path, not just the owning group.
    for group in &path.groups {
        for node in &group.nodes {
            for prereq in &node.prereqs {
                if path.contains_node(prereq) {
                    layout.edges.push(LayoutEdge {
                        id: format!("{prereq}-{}", node.id),
                        source: prereq.clone(),
                        target: node.id.clone(),
                    });
                } else {
                    debug!("Dropping edge for unknown prereq {prereq} -> {}", node.id);
                }
            }
        }
    }

    layout
}

/// Prerequisite depth of every node in a group
fn group_levels(group: &NodeGroup) -> HashMap<String, usize> {
    let mut marks: HashMap<String, Mark> = HashMap::new();
    for node in &group.nodes {
        level_of(&node.id, group, &mut marks);
    }
    marks
        .into_iter()
        .map(|(id, mark)| match mark {
            Mark::Done(level) => (id, level),
            // Unreachable once every node has been visited, but a cycle
            // member left in progress falls back to level 0.
            Mark::InProgress => (id, 0),
        })
        .collect()
}

/// Recursive level computation with in-progress marking
///
/// Revisiting a node whose level is still being computed means the group
/// contains a prerequisite cycle; that edge contributes the fallback level 0
/// so the walk terminates.
fn level_of(node_id: &str, group: &NodeGroup, marks: &mut HashMap<String, Mark>) -> usize {
    match marks.get(node_id) {
        Some(Mark::Done(level)) => return *level,
        Some(Mark::InProgress) => return 0,
        None => {}
    }
    marks.insert(node_id.to_string(), Mark::InProgress);

    let level = group.find_node(node_id).map_or(0, |node| {
        node.prereqs
            .iter()
            .filter(|p| group.find_node(p).is_some())
            .map(|p| level_of(p, group, marks) + 1)
            .max()
            .unwrap_or(0)
    });

    marks.insert(node_id.to_string(), Mark::Done(level));
    level
}

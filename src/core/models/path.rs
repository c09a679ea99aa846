//! Roadmap path and group models

use serde::{Deserialize, Serialize};

use super::node::CourseNode;

/// An ordered cluster of courses within a path
///
/// The title is unique within its path and doubles as the key used by the
/// hidden-groups list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeGroup {
    /// Group title (e.g., "Foundations")
    pub title: String,

    /// Ordered course nodes in this group
    #[serde(default)]
    pub nodes: Vec<CourseNode>,
}

impl NodeGroup {
    /// Ids of every node in this group, in order
    #[must_use]
    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    /// Look up a node in this group by id
    #[must_use]
    pub fn find_node(&self, node_id: &str) -> Option<&CourseNode> {
        self.nodes.iter().find(|n| n.id == node_id)
    }
}

/// One named specialization track containing groups of courses
///
/// Paths are immutable catalog data; the progress store references them only
/// by slug and node id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPath {
    /// URL-safe unique identifier (e.g., "software-engineering")
    pub slug: String,

    /// Display name (e.g., "Software Engineering")
    pub name: String,

    /// Free-text goal statement
    #[serde(default)]
    pub goal: String,

    /// Free-text summary
    #[serde(default)]
    pub summary: String,

    /// Highlighted core subject areas
    #[serde(default)]
    pub core_emphasis: Vec<String>,

    /// Ordered groups of course nodes
    #[serde(default)]
    pub groups: Vec<NodeGroup>,

    /// External reference links
    #[serde(default)]
    pub links: Vec<String>,
}

impl RoadmapPath {
    /// Ids of every node across all groups, in group order
    #[must_use]
    pub fn all_node_ids(&self) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|g| g.nodes.iter().map(|n| n.id.clone()))
            .collect()
    }

    /// Total node count across all groups
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.groups.iter().map(|g| g.nodes.len()).sum()
    }

    /// Whether a node id exists anywhere in the path
    #[must_use]
    pub fn contains_node(&self, node_id: &str) -> bool {
        self.groups.iter().any(|g| g.nodes.iter().any(|n| n.id == node_id))
    }

    /// Look up a node anywhere in the path by id
    #[must_use]
    pub fn find_node(&self, node_id: &str) -> Option<&CourseNode> {
        self.groups.iter().find_map(|g| g.find_node(node_id))
    }

    /// Look up a group by title
    #[must_use]
    pub fn find_group(&self, title: &str) -> Option<&NodeGroup> {
        self.groups.iter().find(|g| g.title == title)
    }
}

//! Course node model

use serde::{Deserialize, Serialize};

/// Whether a course is required for the path or an elective choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Required course for the path
    Core,
    /// Optional course that deepens the path
    Elective,
}

impl Default for NodeKind {
    fn default() -> Self {
        Self::Core
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Core => "core",
            Self::Elective => "elective",
        };
        write!(f, "{as_str}")
    }
}

/// Represents a single course entry in a roadmap path
///
/// Nodes are immutable catalog data. Prerequisites reference other nodes by
/// id and may point into other groups of the same path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseNode {
    /// Unique identifier within a path (e.g., "cs301")
    pub id: String,

    /// Display code (e.g., "CSCI 301")
    pub code: String,

    /// Course title (e.g., "Formal Languages")
    pub title: String,

    /// Core or elective
    #[serde(rename = "type", default)]
    pub kind: NodeKind,

    /// Prerequisite node ids, possibly in other groups of the same path
    #[serde(default)]
    pub prereqs: Vec<String>,

    /// Topic tags used for search/filtering
    #[serde(default)]
    pub tags: Vec<String>,

    /// Long-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Why this course matters for the path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_matters: Option<String>,
}

impl CourseNode {
    /// Create a new node with no prerequisites or tags
    #[must_use]
    pub const fn new(id: String, code: String, title: String, kind: NodeKind) -> Self {
        Self {
            id,
            code,
            title,
            kind,
            prereqs: Vec::new(),
            tags: Vec::new(),
            description: None,
            why_matters: None,
        }
    }

    /// Add a prerequisite by node id
    pub fn add_prereq(&mut self, prereq_id: String) {
        if !self.prereqs.contains(&prereq_id) {
            self.prereqs.push(prereq_id);
        }
    }

    /// Whether any tag matches `query` (case-insensitive substring)
    #[must_use]
    pub fn matches_tag(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }
}

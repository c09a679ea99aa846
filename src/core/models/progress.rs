//! Progress status and per-node progress records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Four-valued completion state of a node for a given user and path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeStatus {
    /// No work recorded (the default; never stored explicitly)
    NotStarted,
    /// Currently being worked on
    InProgress,
    /// Finished
    Completed,
    /// Deliberately passed over
    Skipped,
}

impl Default for NodeStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl NodeStatus {
    /// Kebab-case string form, matching the serialized representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Skipped => "skipped",
        }
    }

    /// Whether this is the default status (absent entries imply it)
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    /// Checklist glyph for CLI rendering
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::NotStarted => ' ',
            Self::InProgress => '~',
            Self::Completed => 'x',
            Self::Skipped => '-',
        }
    }
}

impl std::fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NodeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "not-started" => Ok(Self::NotStarted),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "skipped" => Ok(Self::Skipped),
            other => Err(format!(
                "Unknown status '{other}' (expected not-started, in-progress, completed, or skipped)"
            )),
        }
    }
}

/// Stored progress record for one (path, node) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    /// Current status
    pub status: NodeStatus,
    /// Timestamp of the last status change (ISO-8601)
    pub updated_at: DateTime<Utc>,
}

impl ProgressEntry {
    /// Create an entry stamped with the current time
    #[must_use]
    pub fn now(status: NodeStatus) -> Self {
        Self {
            status,
            updated_at: Utc::now(),
        }
    }
}

/// Derived progress counts for a path or group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressSummary {
    /// Nodes with status exactly `Completed`
    pub completed: usize,
    /// Nodes considered
    pub total: usize,
    /// `round(100 * completed / total)`; 0 when total is 0
    pub percentage: u32,
}

/// Snapshot of non-default progress for one path, used for shareable URLs
///
/// Default-status entries are omitted to keep the encoded payload small.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareableState {
    /// Slug of the path this snapshot belongs to
    pub path_slug: String,
    /// Node id to non-default status
    pub progress: BTreeMap<String, NodeStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_round_trips_as_kebab_case() {
        for status in [
            NodeStatus::NotStarted,
            NodeStatus::InProgress,
            NodeStatus::Completed,
            NodeStatus::Skipped,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: NodeStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            NodeStatus::from_str("completed").unwrap(),
            NodeStatus::Completed
        );
        assert_eq!(
            NodeStatus::from_str("In-Progress").unwrap(),
            NodeStatus::InProgress
        );
        assert!(NodeStatus::from_str("done").is_err());
    }

    #[test]
    fn test_only_not_started_is_default() {
        assert!(NodeStatus::NotStarted.is_default());
        assert!(!NodeStatus::InProgress.is_default());
        assert!(!NodeStatus::Completed.is_default());
        assert!(!NodeStatus::Skipped.is_default());
    }

    #[test]
    fn test_entry_serializes_updated_at_camel_case() {
        let entry = ProgressEntry::now(NodeStatus::Completed);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"updatedAt\""));
        assert!(json.contains("\"completed\""));
    }

    #[test]
    fn test_entry_parses_iso8601() {
        let json = r#"{"status":"skipped","updatedAt":"2025-03-01T12:00:00Z"}"#;
        let entry: ProgressEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.status, NodeStatus::Skipped);
    }
}

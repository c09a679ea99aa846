//! Data models for `RoadmapTracker`

pub mod node;
pub mod path;
pub mod progress;

pub use node::{CourseNode, NodeKind};
pub use path::{NodeGroup, RoadmapPath};
pub use progress::{NodeStatus, ProgressEntry, ProgressSummary, ShareableState};

//! Learning roadmap types.

use serde::{Deserialize, Serialize};

/// A learning roadmap for one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub topic: String,
    pub level: String,
    pub total_duration: String,
    pub description: String,
    pub steps: Vec<RoadmapStep>,
}

/// One step of a roadmap.
///
/// `topics`, `resources` and `skills` hold no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

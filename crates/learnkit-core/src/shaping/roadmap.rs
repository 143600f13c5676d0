use serde::Deserialize;
use serde_json::Value;

use learnkit_protocols::{Roadmap, RoadmapStep, TaskError, TaskKind};

use super::{id_from_value, strip_code_fence};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRoadmap {
    #[serde(default)]
    topic: Option<String>,
    #[serde(default)]
    level: Option<String>,
    #[serde(default)]
    total_duration: String,
    #[serde(default)]
    description: String,
    steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
struct RawStep {
    #[serde(default)]
    id: Option<Value>,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    difficulty: String,
    #[serde(default)]
    topics: Vec<String>,
    #[serde(default)]
    resources: Vec<String>,
    #[serde(default)]
    skills: Vec<String>,
}

/// Parse model output into a roadmap.
///
/// `topic` and `level` fill in for fields the model left out. The
/// roadmap may also arrive wrapped as `{"roadmap": {...}}`.
pub fn parse_roadmap(raw: &str, topic: &str, level: &str) -> Result<Roadmap, TaskError> {
    let malformed = |reason: String| TaskError::malformed(TaskKind::Roadmap, reason);

    let value: Value = serde_json::from_str(strip_code_fence(raw))
        .map_err(|e| malformed(format!("invalid JSON: {}", e)))?;

    let raw_roadmap: RawRoadmap =
        serde_json::from_value(unwrap_roadmap(value)).map_err(|e| malformed(e.to_string()))?;

    if raw_roadmap.steps.is_empty() {
        return Err(malformed("roadmap contains no steps".to_string()));
    }

    let steps = raw_roadmap
        .steps
        .into_iter()
        .enumerate()
        .map(|(index, step)| shape_step(index + 1, step).map_err(malformed))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Roadmap {
        topic: non_blank_or(raw_roadmap.topic, topic),
        level: non_blank_or(raw_roadmap.level, level),
        total_duration: raw_roadmap.total_duration.trim().to_string(),
        description: raw_roadmap.description.trim().to_string(),
        steps,
    })
}

/// Unwrap `{"roadmap": {...}}` when the top level has no steps.
fn unwrap_roadmap(value: Value) -> Value {
    match value {
        Value::Object(mut map) if !map.contains_key("steps") => match map.remove("roadmap") {
            Some(inner @ Value::Object(_)) => inner,
            Some(other) => {
                map.insert("roadmap".to_string(), other);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    }
}

fn shape_step(number: usize, raw: RawStep) -> Result<RoadmapStep, String> {
    if raw.title.trim().is_empty() {
        return Err(format!("step {} has no title", number));
    }

    Ok(RoadmapStep {
        id: id_from_value(raw.id).unwrap_or_else(|| format!("step-{}", number)),
        title: raw.title.trim().to_string(),
        description: raw.description.trim().to_string(),
        duration: raw.duration.trim().to_string(),
        difficulty: raw.difficulty.trim().to_string(),
        topics: dedup(raw.topics),
        resources: dedup(raw.resources),
        skills: dedup(raw.skills),
    })
}

fn non_blank_or(value: Option<String>, fallback: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Trim entries, drop blanks and repeats, keep first-seen order.
fn dedup(items: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(items.len());
    for item in items {
        let item = item.trim();
        if !item.is_empty() && !seen.iter().any(|s: &String| s == item) {
            seen.push(item.to_string());
        }
    }
    seen
}

#[cfg(test)]
#[path = "roadmap_tests.rs"]
mod tests;

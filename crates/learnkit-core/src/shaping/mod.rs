//! Turning raw model text into typed results.
//!
//! Quiz and roadmap output goes through three steps: strip a markdown
//! code fence, parse JSON, then validate into the typed schema. Any
//! failure is reported as [`TaskError::MalformedModelOutput`].
//!
//! [`TaskError::MalformedModelOutput`]: learnkit_protocols::TaskError::MalformedModelOutput

mod fence;
mod quiz;
mod roadmap;

pub use fence::strip_code_fence;
pub use quiz::parse_quiz;
pub use roadmap::parse_roadmap;

use serde_json::Value;

/// Render a JSON id as a string. Strings are kept, numbers are
/// stringified, anything else counts as missing.
fn id_from_value(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

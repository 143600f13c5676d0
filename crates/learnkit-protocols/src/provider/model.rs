//! Model definition types.

use serde::{Deserialize, Serialize};

/// Definition of a hosted model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDefinition {
    /// Model identifier sent to the API.
    pub id: String,

    /// Human-readable name.
    pub name: String,
}

impl ModelDefinition {
    /// Create a new model definition.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

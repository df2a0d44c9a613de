//! Loosely-typed entity references.
//!
//! The backend reports identifiers either as numbers or as human-readable
//! strings depending on the endpoint, so references are modeled as an
//! explicit union instead of a single scalar type.

use serde::{Deserialize, Serialize};

/// Reference to a backend entity, numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef {
    /// Numeric identifier.
    Id(i64),
    /// Human-readable reference (e.g. an order code).
    Text(String),
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<i64> for EntityRef {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<String> for EntityRef {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for EntityRef {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

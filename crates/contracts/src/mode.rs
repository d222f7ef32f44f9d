//! Execution mode and target resolution outcome

use serde::{Deserialize, Serialize};

/// Where the recipe is running
///
/// `Automated` publishes to the archival target, `Local` never writes there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// CI / automated build
    Automated,
    /// Developer machine
    #[default]
    Local,
}

impl ExecutionMode {
    /// Decide the mode from a CI indicator value
    ///
    /// Only the exact string `"true"` selects `Automated`.
    pub fn from_indicator(value: Option<&str>) -> Self {
        match value {
            Some("true") => Self::Automated,
            _ => Self::Local,
        }
    }
}

/// Outcome of resolving the final copy target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TargetResolution {
    /// Store found in the catalog
    Found { url: String },
    /// Store id missing from the catalog
    NotFound { id: String, known_ids: Vec<String> },
    /// Resolution skipped, copy stage inactive
    Disabled,
}

impl TargetResolution {
    /// Target url, if one was resolved
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Found { url } => Some(url),
            _ => None,
        }
    }
}

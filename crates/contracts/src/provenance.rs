//! Provenance attributes attached to the output store metadata

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute key for the commit URL
pub const BUILD_GIT_HASH_KEY: &str = "pangeo_forge_build_git_hash";

/// Attribute key for the build timestamp
pub const BUILD_TIMESTAMP_KEY: &str = "pangeo_forge_build_timestamp";

/// Build metadata injected into store-level attributes
///
/// Empty for local runs; otherwise holds exactly the git hash URL and the
/// build timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProvenanceAttrs(BTreeMap<String, String>);

impl ProvenanceAttrs {
    /// Empty attribute set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attributes for a build at `git_hash_url`, produced at `timestamp`
    pub fn build(git_hash_url: impl Into<String>, timestamp: impl Into<String>) -> Self {
        let mut attrs = BTreeMap::new();
        attrs.insert(BUILD_GIT_HASH_KEY.to_string(), git_hash_url.into());
        attrs.insert(BUILD_TIMESTAMP_KEY.to_string(), timestamp.into());
        Self(attrs)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

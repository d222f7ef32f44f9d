//! RecipeBlueprint - recipe constants
//!
//! Describes which files to fetch and how the output store is laid out.
//! Every field has a default matching the CASM recipe, so an empty
//! document is a valid blueprint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Placeholder replaced by the year in `SourceConfig::url_template`
pub const YEAR_PLACEHOLDER: &str = "{year}";

/// Recipe blueprint version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// Complete recipe blueprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RecipeBlueprint {
    #[serde(default)]
    pub version: ConfigVersion,

    /// Recipe id, also the catalog store id to publish to
    #[serde(default = "default_id")]
    #[validate(length(min = 1, message = "id cannot be empty"))]
    pub id: String,

    /// Input file source
    #[serde(default)]
    #[validate(nested)]
    pub source: SourceConfig,

    /// Output store layout
    #[serde(default)]
    #[validate(nested)]
    pub store: StoreConfig,
}

/// Input file source: one file per year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SourceConfig {
    /// URL template, `{year}` is replaced per file
    #[serde(default = "default_url_template")]
    #[validate(length(min = 1))]
    pub url_template: String,

    /// First year (inclusive)
    #[serde(default = "default_start_year")]
    pub start_year: u16,

    /// Last year (inclusive)
    #[serde(default = "default_end_year")]
    pub end_year: u16,

    /// Simultaneous downloads allowed against the file host
    #[serde(default = "default_max_concurrency")]
    #[validate(range(min = 1, message = "max_concurrency must be >= 1"))]
    pub max_concurrency: usize,
}

/// Output chunked store layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct StoreConfig {
    /// Store name (e.g., "casm.zarr")
    #[serde(default = "default_store_name")]
    #[validate(length(min = 1, message = "store_name cannot be empty"))]
    pub store_name: String,

    /// Dimension the yearly files are concatenated along
    #[serde(default = "default_concat_dim")]
    #[validate(length(min = 1, message = "concat_dim cannot be empty"))]
    pub concat_dim: String,

    /// Chunk size along `concat_dim`
    #[serde(default = "default_chunk_size")]
    #[validate(range(min = 1, message = "chunk_size must be >= 1"))]
    pub chunk_size: usize,
}

fn default_id() -> String {
    "casm".to_string()
}

fn default_url_template() -> String {
    "https://zenodo.org/record/7072512/files/CASM_SM_{year}.nc".to_string()
}

fn default_start_year() -> u16 {
    2002
}

fn default_end_year() -> u16 {
    2020
}

fn default_max_concurrency() -> usize {
    1
}

fn default_store_name() -> String {
    "casm.zarr".to_string()
}

fn default_concat_dim() -> String {
    "date".to_string()
}

fn default_chunk_size() -> usize {
    20
}

impl Default for RecipeBlueprint {
    fn default() -> Self {
        Self {
            version: ConfigVersion::default(),
            id: default_id(),
            source: SourceConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url_template: default_url_template(),
            start_year: default_start_year(),
            end_year: default_end_year(),
            max_concurrency: default_max_concurrency(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: default_store_name(),
            concat_dim: default_concat_dim(),
            chunk_size: default_chunk_size(),
        }
    }
}

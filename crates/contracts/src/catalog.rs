//! Catalog - Config Loader output
//!
//! The catalog document lists the stores a feedstock publishes. Each store
//! maps an id to its final archival location.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Catalog document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Catalog {
    /// Human-readable dataset title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Dataset description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Store definitions, in document order
    #[validate(nested)]
    pub stores: Vec<CatalogRecord>,
}

/// One store definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CatalogRecord {
    /// Store identifier, expected unique within the catalog
    #[validate(length(min = 1, message = "id cannot be empty"))]
    pub id: String,

    /// Target store location (e.g., "gs://bucket/casm.zarr")
    #[validate(length(min = 1, message = "url cannot be empty"))]
    pub url: String,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CatalogRecord {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            name: None,
        }
    }
}

impl Catalog {
    /// Build a catalog from bare records
    pub fn from_stores(stores: Vec<CatalogRecord>) -> Self {
        Self {
            title: None,
            description: None,
            stores,
        }
    }

    /// All store ids, in catalog order (duplicates kept)
    pub fn ids(&self) -> Vec<String> {
        self.stores.iter().map(|s| s.id.clone()).collect()
    }
}

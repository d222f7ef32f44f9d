//! Stage graph - Pipeline Assembly output
//!
//! An ordered list of stages applied to a file pattern. The graph is pure
//! description; executing it is the engine's job.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ProvenanceAttrs;

/// How files are combined along a dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombineOp {
    Concat,
}

/// A dimension the pattern combines along
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimKey {
    pub name: String,
    pub operation: CombineOp,
}

/// One input file and its position along the concat dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternItem {
    pub index: usize,
    pub url: String,
}

/// Input files keyed along a single concat dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePattern {
    concat_dim: String,
    items: Vec<PatternItem>,
}

impl FilePattern {
    /// Key a file sequence along `concat_dim`, preserving order
    pub fn from_file_sequence(urls: Vec<String>, concat_dim: impl Into<String>) -> Self {
        let items = urls
            .into_iter()
            .enumerate()
            .map(|(index, url)| PatternItem { index, url })
            .collect();
        Self {
            concat_dim: concat_dim.into(),
            items,
        }
    }

    pub fn concat_dim(&self) -> &str {
        &self.concat_dim
    }

    pub fn items(&self) -> &[PatternItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Dimensions the store writer must combine along
    pub fn combine_dim_keys(&self) -> Vec<DimKey> {
        vec![DimKey {
            name: self.concat_dim.clone(),
            operation: CombineOp::Concat,
        }]
    }
}

/// A processing stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stage {
    /// Fetch raw bytes for each input
    OpenUrl { max_concurrency: usize },

    /// Parse each file into an array dataset
    OpenWithXarray,

    /// Write datasets into a chunked store
    StoreToZarr {
        store_name: String,
        target_chunks: BTreeMap<String, usize>,
        combine_dims: Vec<DimKey>,
    },

    /// Attach attributes to store-level metadata
    InjectAttrs { attrs: ProvenanceAttrs },

    /// Consolidate dimension coordinates into single chunks
    ConsolidateDimensionCoordinates,

    /// Consolidate store metadata into one object
    ConsolidateMetadata,

    /// Copy the finished store to its archival location
    ///
    /// `None` means the copy is skipped.
    Copy { target: Option<String> },
}

impl Stage {
    /// Stage name (used for logging/metrics)
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenUrl { .. } => "open_url",
            Self::OpenWithXarray => "open_with_xarray",
            Self::StoreToZarr { .. } => "store_to_zarr",
            Self::InjectAttrs { .. } => "inject_attrs",
            Self::ConsolidateDimensionCoordinates => "consolidate_dimension_coordinates",
            Self::ConsolidateMetadata => "consolidate_metadata",
            Self::Copy { .. } => "copy",
        }
    }
}

/// Assembled pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageGraph {
    pub recipe_id: String,
    pub pattern: FilePattern,
    pub stages: Vec<Stage>,
}

impl StageGraph {
    /// Archival target of the copy stage, if active
    pub fn copy_target(&self) -> Option<&str> {
        self.stages.iter().find_map(|stage| match stage {
            Stage::Copy { target } => target.as_deref(),
            _ => None,
        })
    }

    pub fn is_copy_active(&self) -> bool {
        self.copy_target().is_some()
    }

    /// Stage names in order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(Stage::name).collect()
    }
}

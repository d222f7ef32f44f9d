//! # Config Loader
//!
//! Configuration loading and parsing module.
//!
//! Responsibilities:
//! - Parse the YAML catalog (TOML/JSON also accepted)
//! - Parse the optional recipe blueprint
//! - Validate both before anything downstream sees them
//!
//! A catalog that fails to load aborts the run; there is no partial catalog.
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let catalog = ConfigLoader::load_catalog_from_path(Path::new("feedstock/catalog.yaml")).unwrap();
//! println!("stores: {}", catalog.stores.len());
//! ```

mod parser;
mod validator;

pub use contracts::{Catalog, RecipeBlueprint};
pub use parser::ConfigFormat;
pub use validator::catalog_warnings;

use contracts::ContractError;
use std::path::Path;
use tracing::debug;

/// Configuration loader
///
/// Provides static methods to load the catalog and recipe blueprint from
/// files or strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the catalog from a file path
    ///
    /// Format is detected from the extension (.yaml / .yml / .toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure (including a missing `stores` key)
    /// - Validation failure
    pub fn load_catalog_from_path(path: &Path) -> Result<Catalog, ContractError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        let catalog = Self::load_catalog_from_str(&content, format)?;
        debug!(path = %path.display(), stores = catalog.stores.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Load the catalog from a string
    pub fn load_catalog_from_str(
        content: &str,
        format: ConfigFormat,
    ) -> Result<Catalog, ContractError> {
        let catalog: Catalog = parser::parse(content, format)?;
        validator::validate_catalog(&catalog)?;
        Ok(catalog)
    }

    /// Load a recipe blueprint from a file path
    pub fn load_recipe_from_path(path: &Path) -> Result<RecipeBlueprint, ContractError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::load_recipe_from_str(&content, format)
    }

    /// Load a recipe blueprint from a string
    pub fn load_recipe_from_str(
        content: &str,
        format: ConfigFormat,
    ) -> Result<RecipeBlueprint, ContractError> {
        let blueprint: RecipeBlueprint = parser::parse(content, format)?;
        validator::validate_recipe(&blueprint)?;
        Ok(blueprint)
    }

    /// Validate a blueprint built in code
    pub fn validate_recipe(blueprint: &RecipeBlueprint) -> Result<(), ContractError> {
        validator::validate_recipe(blueprint)
    }

    /// Serialize a recipe blueprint to TOML
    pub fn recipe_to_toml(blueprint: &RecipeBlueprint) -> Result<String, ContractError> {
        toml::to_string_pretty(blueprint)
            .map_err(|e| ContractError::config_parse(format!("TOML serialize error: {e}")))
    }
}

impl ConfigLoader {
    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, ContractError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ContractError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext).ok_or_else(|| {
            ContractError::config_parse(format!("unsupported config format: .{ext}"))
        })
    }

    /// Read configuration file content
    fn read_file(path: &Path) -> Result<String, ContractError> {
        Ok(std::fs::read_to_string(path)?)
    }
}

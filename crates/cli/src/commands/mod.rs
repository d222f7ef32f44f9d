//! Command implementations.

mod info;
mod run;
mod validate;

pub use info::run_info;
pub use run::run_recipe;
pub use validate::run_validate;

use std::path::Path;

use anyhow::{Context, Result};
use config_loader::ConfigLoader;
use contracts::{Catalog, RecipeBlueprint};

/// Load the catalog, failing the command if it is missing or malformed
fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        anyhow::bail!("Catalog file not found: {}", path.display());
    }
    ConfigLoader::load_catalog_from_path(path)
        .with_context(|| format!("Failed to load catalog from {}", path.display()))
}

/// Load the recipe blueprint, or the built-in defaults when no file is given
fn load_recipe(path: Option<&Path>) -> Result<RecipeBlueprint> {
    match path {
        Some(path) => ConfigLoader::load_recipe_from_path(path)
            .with_context(|| format!("Failed to load recipe from {}", path.display())),
        None => Ok(RecipeBlueprint::default()),
    }
}

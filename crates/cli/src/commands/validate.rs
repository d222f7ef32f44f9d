//! `validate` command implementation.

use anyhow::{Context, Result};
use config_loader::{catalog_warnings, ConfigLoader};
use serde::Serialize;
use tracing::info;

use crate::cli::ValidateArgs;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    catalog_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    recipe_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<CatalogSummary>,
}

#[derive(Serialize)]
struct CatalogSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    store_count: usize,
    store_ids: Vec<String>,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!(catalog = %args.catalog.display(), "Validating catalog");

    let result = validate(args);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Validation failed")
    }
}

fn validate(args: &ValidateArgs) -> ValidationResult {
    let mut result = ValidationResult {
        valid: false,
        catalog_path: args.catalog.display().to_string(),
        recipe_path: args.recipe.as_ref().map(|p| p.display().to_string()),
        error: None,
        warnings: Vec::new(),
        summary: None,
    };

    if !args.catalog.exists() {
        result.error = Some(format!("File not found: {}", args.catalog.display()));
        return result;
    }

    let catalog = match ConfigLoader::load_catalog_from_path(&args.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            result.error = Some(e.to_string());
            return result;
        }
    };

    result.warnings = catalog_warnings(&catalog);
    result.summary = Some(CatalogSummary {
        title: catalog.title.clone(),
        store_count: catalog.stores.len(),
        store_ids: catalog.ids(),
    });

    if let Some(ref recipe_path) = args.recipe {
        match ConfigLoader::load_recipe_from_path(recipe_path) {
            Ok(blueprint) => {
                if !catalog.stores.iter().any(|s| s.id == blueprint.id) {
                    result.warnings.push(format!(
                        "recipe id '{}' has no catalog store - automated runs will fail",
                        blueprint.id
                    ));
                }
            }
            Err(e) => {
                result.error = Some(format!("recipe: {e}"));
                return result;
            }
        }
    }

    result.valid = true;
    result
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Catalog is valid: {}", result.catalog_path);
        if let Some(ref recipe) = result.recipe_path {
            println!("✓ Recipe is valid: {}", recipe);
        }

        if let Some(ref summary) = result.summary {
            if let Some(ref title) = summary.title {
                println!("\n  Title: {}", title);
            }
            println!("  Stores: {}", summary.store_count);
            println!("  Ids: {:?}", summary.store_ids);
        }

        if !result.warnings.is_empty() {
            println!("\n⚠ Warnings:");
            for warning in &result.warnings {
                println!("  - {}", warning);
            }
        }
    } else {
        println!("✗ Validation failed: {}", result.catalog_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }
}

//! `info` command implementation.

use anyhow::{Context, Result};
use contracts::{Catalog, RecipeBlueprint};
use recipe::input_urls;
use serde::Serialize;
use tracing::info;

use super::{load_catalog, load_recipe};
use crate::cli::InfoArgs;

/// Catalog and recipe info for JSON output
#[derive(Serialize)]
struct FeedstockInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    stores: Vec<StoreInfo>,
    recipe: RecipeInfo,
}

#[derive(Serialize)]
struct StoreInfo {
    id: String,
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Serialize)]
struct RecipeInfo {
    id: String,
    years: String,
    input_count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    inputs: Vec<String>,
    store_name: String,
    concat_dim: String,
    chunk_size: usize,
    max_concurrency: usize,
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    info!(catalog = %args.catalog.display(), "Loading feedstock info");

    let catalog = load_catalog(&args.catalog)?;
    let blueprint = load_recipe(args.recipe.as_deref())?;
    let info = build_info(&catalog, &blueprint, args.inputs);

    if args.json {
        let json = serde_json::to_string_pretty(&info).context("Failed to serialize info")?;
        println!("{}", json);
    } else {
        print_info(&info);
    }

    Ok(())
}

fn build_info(catalog: &Catalog, blueprint: &RecipeBlueprint, list_inputs: bool) -> FeedstockInfo {
    let urls = input_urls(&blueprint.source);

    FeedstockInfo {
        title: catalog.title.clone(),
        stores: catalog
            .stores
            .iter()
            .map(|s| StoreInfo {
                id: s.id.clone(),
                url: s.url.clone(),
                name: s.name.clone(),
            })
            .collect(),
        recipe: RecipeInfo {
            id: blueprint.id.clone(),
            years: format!(
                "{}..={}",
                blueprint.source.start_year, blueprint.source.end_year
            ),
            input_count: urls.len(),
            inputs: if list_inputs { urls } else { Vec::new() },
            store_name: blueprint.store.store_name.clone(),
            concat_dim: blueprint.store.concat_dim.clone(),
            chunk_size: blueprint.store.chunk_size,
            max_concurrency: blueprint.source.max_concurrency,
        },
    }
}

fn print_info(info: &FeedstockInfo) {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                    CASM Feedstock                            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    if let Some(ref title) = info.title {
        println!("📖 {}\n", title);
    }

    println!("🗄  Stores ({})", info.stores.len());
    for (i, store) in info.stores.iter().enumerate() {
        let prefix = if i == info.stores.len() - 1 { "└─" } else { "├─" };
        println!("   {} {} → {}", prefix, store.id, store.url);
    }

    let recipe = &info.recipe;
    println!("\n⚙️  Recipe '{}'", recipe.id);
    println!("   ├─ Years: {} ({} files)", recipe.years, recipe.input_count);
    println!("   ├─ Fetch concurrency: {}", recipe.max_concurrency);
    println!("   ├─ Store: {}", recipe.store_name);
    println!(
        "   └─ Chunks: {} = {}",
        recipe.concat_dim, recipe.chunk_size
    );

    if !recipe.inputs.is_empty() {
        println!("\n📥 Inputs");
        for (i, url) in recipe.inputs.iter().enumerate() {
            let prefix = if i == recipe.inputs.len() - 1 { "└─" } else { "├─" };
            println!("   {} {}", prefix, url);
        }
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::CatalogRecord;

    #[test]
    fn test_build_info_lists_inputs_on_request() {
        let catalog = Catalog::from_stores(vec![CatalogRecord::new("casm", "s3://x")]);
        let blueprint = RecipeBlueprint::default();

        let brief = build_info(&catalog, &blueprint, false);
        assert_eq!(brief.recipe.input_count, 19);
        assert!(brief.recipe.inputs.is_empty());
        assert_eq!(brief.recipe.years, "2002..=2020");

        let full = build_info(&catalog, &blueprint, true);
        assert_eq!(full.recipe.inputs.len(), 19);
        assert_eq!(full.stores[0].id, "casm");
    }
}

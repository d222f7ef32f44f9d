//! `run` command implementation.

use anyhow::{Context, Result};
use contracts::{Catalog, ExecutionEngine, ExecutionMode, RecipeBlueprint, StageGraph};
use recipe::{assemble, LogEngine, ManifestEngine, RecipeContext};
use tracing::info;

use super::{load_catalog, load_recipe};
use crate::cli::RunArgs;

/// CI indicator variable
const ENV_GITHUB_ACTIONS: &str = "GITHUB_ACTIONS";

/// Execute the `run` command
pub fn run_recipe(args: &RunArgs) -> Result<()> {
    info!(catalog = %args.catalog.display(), "Loading catalog");
    let catalog = load_catalog(&args.catalog)?;
    let blueprint = load_recipe(args.recipe.as_deref())?;

    let mode = args.mode.map(ExecutionMode::from).unwrap_or_else(detect_mode);
    announce_mode(mode);

    let graph = plan(mode, &catalog, &blueprint)?;

    if args.dry_run {
        info!("Dry run mode - stage graph assembled, not handing off");
        print_plan_summary(&graph);
        return Ok(());
    }

    let mut engine: Box<dyn ExecutionEngine> = match &args.manifest {
        Some(path) => Box::new(ManifestEngine::new("manifest", path)),
        None => Box::new(LogEngine::new("log")),
    };

    let report = engine
        .submit(&graph)
        .with_context(|| format!("Failed to hand off stage graph to '{}'", engine.name()))?;

    info!(
        engine = engine.name(),
        stages = report.stages,
        inputs = report.inputs,
        copy_active = report.copy_active,
        "Stage graph handed off"
    );
    Ok(())
}

/// Mode from the CI indicator in the process environment
fn detect_mode() -> ExecutionMode {
    ExecutionMode::from_indicator(std::env::var(ENV_GITHUB_ACTIONS).ok().as_deref())
}

fn announce_mode(mode: ExecutionMode) {
    match mode {
        ExecutionMode::Automated => info!(mode = ?mode, "Running inside GitHub Actions."),
        ExecutionMode::Local => {
            info!(mode = ?mode, "Running locally. Deactivating final copy stage.")
        }
    }
}

/// Build the context for `mode` and assemble the graph
fn plan(mode: ExecutionMode, catalog: &Catalog, blueprint: &RecipeBlueprint) -> Result<StageGraph> {
    let context = RecipeContext::for_mode(mode, catalog, &blueprint.id)
        .context("Failed to build recipe context")?;
    assemble(blueprint, &context).context("Failed to assemble stage graph")
}

/// Print plan summary for dry-run mode
fn print_plan_summary(graph: &StageGraph) {
    println!("\n=== Recipe Plan: {} ===\n", graph.recipe_id);
    println!(
        "Inputs: {} files along '{}'",
        graph.pattern.len(),
        graph.pattern.concat_dim()
    );
    if let (Some(first), Some(last)) = (graph.pattern.items().first(), graph.pattern.items().last())
    {
        println!("  first: {}", first.url);
        println!("  last:  {}", last.url);
    }

    println!("\nStages ({}):", graph.stages.len());
    for (i, name) in graph.stage_names().iter().enumerate() {
        println!("  {}. {}", i + 1, name);
    }

    match graph.copy_target() {
        Some(target) => println!("\nCopy target: {}", target),
        None => println!("\nCopy target: (disabled)"),
    }
    println!();
}

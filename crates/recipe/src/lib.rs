//! # Recipe
//!
//! The CASM recipe: catalog lookup, provenance, inputs and stage assembly.
//!
//! Flow:
//! 1. [`resolve_target`] picks the archival target for the execution mode
//! 2. [`RecipeContext`] pairs it with provenance attributes
//! 3. [`assemble`] builds the [`StageGraph`](contracts::StageGraph)
//! 4. An [`ExecutionEngine`](contracts::ExecutionEngine) receives the graph
//!
//! Everything here is synchronous and runs once per process.

mod assembly;
mod engines;
mod inputs;
mod lookup;
mod provenance;

pub use assembly::{assemble, resolve_target, RecipeContext};
pub use engines::{LogEngine, ManifestEngine};
pub use inputs::{file_pattern, input_urls};
pub use lookup::{find_recipe_meta, miss_diagnostic};
pub use provenance::{
    build_attrs, build_attrs_with, format_timestamp, ENV_GITHUB_REPOSITORY, ENV_GITHUB_SERVER_URL,
    ENV_GITHUB_SHA,
};

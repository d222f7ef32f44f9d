//! Pipeline assembly
//!
//! Mode branch:
//! - `Automated`: target resolved from the catalog, provenance from CI env,
//!   copy stage active
//! - `Local`: no catalog lookup, empty provenance, copy stage skipped

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use contracts::{
    Catalog, ContractError, ExecutionMode, ProvenanceAttrs, RecipeBlueprint, Stage, StageGraph,
    TargetResolution,
};
use tracing::{info, instrument};

use crate::inputs::file_pattern;
use crate::lookup::find_recipe_meta;
use crate::provenance::build_attrs_with;

/// Resolve the archival target for `store_id`
///
/// Local runs never consult the catalog.
pub fn resolve_target(mode: ExecutionMode, catalog: &Catalog, store_id: &str) -> TargetResolution {
    match mode {
        ExecutionMode::Local => TargetResolution::Disabled,
        ExecutionMode::Automated => match find_recipe_meta(&catalog.stores, store_id) {
            Some(record) => TargetResolution::Found {
                url: record.url.clone(),
            },
            None => TargetResolution::NotFound {
                id: store_id.to_string(),
                known_ids: catalog.ids(),
            },
        },
    }
}

/// Mode-dependent inputs to assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeContext {
    pub mode: ExecutionMode,
    pub target: TargetResolution,
    pub attrs: ProvenanceAttrs,
}

impl RecipeContext {
    /// Context for a local run
    pub fn local() -> Self {
        Self {
            mode: ExecutionMode::Local,
            target: TargetResolution::Disabled,
            attrs: ProvenanceAttrs::empty(),
        }
    }

    /// Build the context from the process environment and clock
    pub fn for_mode(
        mode: ExecutionMode,
        catalog: &Catalog,
        store_id: &str,
    ) -> Result<Self, ContractError> {
        Self::for_mode_with(mode, catalog, store_id, |var| std::env::var(var).ok(), Utc::now())
    }

    /// Build the context from an explicit environment lookup and clock
    ///
    /// # Errors
    /// `MissingEnv` in automated mode when a provenance variable is unset.
    pub fn for_mode_with<F>(
        mode: ExecutionMode,
        catalog: &Catalog,
        store_id: &str,
        env: F,
        now: DateTime<Utc>,
    ) -> Result<Self, ContractError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match mode {
            ExecutionMode::Local => Ok(Self::local()),
            ExecutionMode::Automated => {
                let target = resolve_target(mode, catalog, store_id);
                let attrs = build_attrs_with(env, now)?;
                Ok(Self {
                    mode,
                    target,
                    attrs,
                })
            }
        }
    }

    /// Copy target for the final stage
    ///
    /// # Errors
    /// `TargetNotFound` when the catalog lookup missed.
    fn copy_target(&self) -> Result<Option<String>, ContractError> {
        match &self.target {
            TargetResolution::Found { url } => Ok(Some(url.clone())),
            TargetResolution::Disabled => Ok(None),
            TargetResolution::NotFound { id, known_ids } => Err(ContractError::TargetNotFound {
                id: id.clone(),
                known_ids: known_ids.clone(),
            }),
        }
    }
}

/// Assemble the stage graph
///
/// Stage order: fetch, parse, store, annotate, consolidate coordinates,
/// consolidate metadata, copy.
#[instrument(name = "recipe_assemble", skip_all, fields(recipe_id = %blueprint.id, mode = ?context.mode))]
pub fn assemble(
    blueprint: &RecipeBlueprint,
    context: &RecipeContext,
) -> Result<StageGraph, ContractError> {
    let target = context.copy_target()?;
    let copy_active = target.is_some();
    let pattern = file_pattern(blueprint);

    let mut target_chunks = BTreeMap::new();
    target_chunks.insert(blueprint.store.concat_dim.clone(), blueprint.store.chunk_size);

    let stages = vec![
        Stage::OpenUrl {
            max_concurrency: blueprint.source.max_concurrency,
        },
        Stage::OpenWithXarray,
        Stage::StoreToZarr {
            store_name: blueprint.store.store_name.clone(),
            target_chunks,
            combine_dims: pattern.combine_dim_keys(),
        },
        Stage::InjectAttrs {
            attrs: context.attrs.clone(),
        },
        Stage::ConsolidateDimensionCoordinates,
        Stage::ConsolidateMetadata,
        Stage::Copy { target },
    ];

    info!(
        inputs = pattern.len(),
        stages = stages.len(),
        copy_active,
        "stage graph assembled"
    );

    Ok(StageGraph {
        recipe_id: blueprint.id.clone(),
        pattern,
        stages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contracts::CatalogRecord;

    fn catalog() -> Catalog {
        Catalog::from_stores(vec![CatalogRecord::new("casm", "s3://bucket/casm.zarr")])
    }

    fn ci_env(var: &str) -> Option<String> {
        match var {
            "GITHUB_SERVER_URL" => Some("https://github.com".into()),
            "GITHUB_REPOSITORY" => Some("org/repo".into()),
            "GITHUB_SHA" => Some("abc123".into()),
            _ => None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_resolve_target_three_states() {
        let c = catalog();
        assert_eq!(
            resolve_target(ExecutionMode::Automated, &c, "casm"),
            TargetResolution::Found {
                url: "s3://bucket/casm.zarr".into()
            }
        );
        assert_eq!(
            resolve_target(ExecutionMode::Automated, &c, "nope"),
            TargetResolution::NotFound {
                id: "nope".into(),
                known_ids: vec!["casm".into()]
            }
        );
        assert_eq!(
            resolve_target(ExecutionMode::Local, &c, "nope"),
            TargetResolution::Disabled
        );
    }

    #[test]
    fn test_local_context_ignores_env() {
        let ctx = RecipeContext::for_mode_with(
            ExecutionMode::Local,
            &catalog(),
            "casm",
            |_| None,
            now(),
        )
        .unwrap();
        assert_eq!(ctx, RecipeContext::local());
        assert!(ctx.attrs.is_empty());
    }

    #[test]
    fn test_automated_context_requires_env() {
        let result = RecipeContext::for_mode_with(
            ExecutionMode::Automated,
            &catalog(),
            "casm",
            |_| None,
            now(),
        );
        assert!(matches!(result, Err(ContractError::MissingEnv { .. })));
    }

    #[test]
    fn test_stage_order() {
        let graph = assemble(&RecipeBlueprint::default(), &RecipeContext::local()).unwrap();
        assert_eq!(
            graph.stage_names(),
            vec![
                "open_url",
                "open_with_xarray",
                "store_to_zarr",
                "inject_attrs",
                "consolidate_dimension_coordinates",
                "consolidate_metadata",
                "copy",
            ]
        );
    }

    #[test]
    fn test_store_stage_parameters() {
        let graph = assemble(&RecipeBlueprint::default(), &RecipeContext::local()).unwrap();
        assert_eq!(graph.stages[0], Stage::OpenUrl { max_concurrency: 1 });
        match &graph.stages[2] {
            Stage::StoreToZarr {
                store_name,
                target_chunks,
                combine_dims,
            } => {
                assert_eq!(store_name, "casm.zarr");
                assert_eq!(target_chunks.get("date"), Some(&20));
                assert_eq!(combine_dims[0].name, "date");
            }
            other => panic!("unexpected stage: {other:?}"),
        }
    }

    #[test]
    fn test_local_copy_is_skipped() {
        let graph = assemble(&RecipeBlueprint::default(), &RecipeContext::local()).unwrap();
        assert!(!graph.is_copy_active());
        assert_eq!(
            graph.stages[3],
            Stage::InjectAttrs {
                attrs: ProvenanceAttrs::empty()
            }
        );
    }

    #[test]
    fn test_automated_copy_targets_catalog_url() {
        let ctx = RecipeContext::for_mode_with(
            ExecutionMode::Automated,
            &catalog(),
            "casm",
            ci_env,
            now(),
        )
        .unwrap();
        let graph = assemble(&RecipeBlueprint::default(), &ctx).unwrap();
        assert_eq!(graph.copy_target(), Some("s3://bucket/casm.zarr"));
        match &graph.stages[3] {
            Stage::InjectAttrs { attrs } => assert_eq!(attrs.len(), 2),
            other => panic!("unexpected stage: {other:?}"),
        }
    }

    #[test]
    fn test_automated_missing_store_fails_assembly() {
        let ctx = RecipeContext::for_mode_with(
            ExecutionMode::Automated,
            &Catalog::from_stores(vec![CatalogRecord::new("other", "x")]),
            "casm",
            ci_env,
            now(),
        )
        .unwrap();
        let err = assemble(&RecipeBlueprint::default(), &ctx).unwrap_err();
        assert!(matches!(err, ContractError::TargetNotFound { ref id, .. } if id == "casm"));
    }
}

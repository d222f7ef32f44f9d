//! # Integration Tests
//!
//! End-to-end scenarios across the workspace.
//!
//! Covers:
//! - catalog document -> lookup
//! - execution mode -> target resolution and provenance
//! - blueprint -> stage graph -> engine hand-off

#[cfg(test)]
mod catalog_tests {
    use config_loader::{ConfigFormat, ConfigLoader};
    use recipe::{find_recipe_meta, miss_diagnostic};

    /// Catalog with one matching store resolves its url
    #[test]
    fn test_e2e_lookup_found() {
        let catalog = ConfigLoader::load_catalog_from_str(
            r#"{"stores": [{"id": "casm", "url": "s3://bucket/casm.zarr"}]}"#,
            ConfigFormat::Json,
        )
        .unwrap();

        let record = find_recipe_meta(&catalog.stores, "casm").unwrap();
        assert_eq!(record.url, "s3://bucket/casm.zarr");
    }

    /// Catalog without the id reports absence and lists known ids
    #[test]
    fn test_e2e_lookup_missing() {
        let catalog = ConfigLoader::load_catalog_from_str(
            r#"{"stores": [{"id": "other", "url": "x"}]}"#,
            ConfigFormat::Json,
        )
        .unwrap();

        assert!(find_recipe_meta(&catalog.stores, "casm").is_none());
        let msg = miss_diagnostic(&catalog.stores, "casm");
        assert!(msg.contains(r#"["other"]"#), "got: {msg}");
    }

    #[test]
    fn test_shipped_catalog_has_casm_store() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../feedstock/catalog.yaml");
        let catalog = ConfigLoader::load_catalog_from_path(&path).unwrap();
        assert!(find_recipe_meta(&catalog.stores, "casm").is_some());
    }

    #[test]
    fn test_shipped_recipe_matches_defaults() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../feedstock/recipe.toml");
        let blueprint = ConfigLoader::load_recipe_from_path(&path).unwrap();
        assert_eq!(blueprint, contracts::RecipeBlueprint::default());
    }
}

#[cfg(test)]
mod pipeline_tests {
    use chrono::{TimeZone, Utc};
    use contracts::{
        Catalog, CatalogRecord, ContractError, ExecutionEngine, ExecutionMode, ProvenanceAttrs,
        RecipeBlueprint, Stage, StageGraph, TargetResolution, BUILD_GIT_HASH_KEY,
    };
    use recipe::{assemble, input_urls, resolve_target, LogEngine, ManifestEngine, RecipeContext};

    fn catalog() -> Catalog {
        Catalog::from_stores(vec![CatalogRecord::new("casm", "s3://bucket/casm.zarr")])
    }

    fn ci_env(var: &str) -> Option<String> {
        match var {
            "GITHUB_SERVER_URL" => Some("https://github.com".to_string()),
            "GITHUB_REPOSITORY" => Some("leap-stc/casm_feedstock".to_string()),
            "GITHUB_SHA" => Some("deadbeef".to_string()),
            _ => None,
        }
    }

    /// Local mode: no resolution, disabled target, empty provenance
    #[test]
    fn test_e2e_local_mode() {
        // The catalog lacks the id on purpose: local runs must not look it up.
        let catalog = Catalog::from_stores(vec![CatalogRecord::new("other", "x")]);
        assert_eq!(
            resolve_target(ExecutionMode::Local, &catalog, "casm"),
            TargetResolution::Disabled
        );

        let ctx = RecipeContext::for_mode_with(
            ExecutionMode::Local,
            &catalog,
            "casm",
            |_| panic!("local mode must not read the environment"),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(ctx.target, TargetResolution::Disabled);
        assert_eq!(ctx.attrs, ProvenanceAttrs::empty());

        let graph = assemble(&RecipeBlueprint::default(), &ctx).unwrap();
        assert_eq!(graph.stages.last(), Some(&Stage::Copy { target: None }));
    }

    /// Default year range yields 19 CASM files
    #[test]
    fn test_e2e_input_sequence() {
        let urls = input_urls(&RecipeBlueprint::default().source);
        assert_eq!(urls.len(), 19);
        for (url, year) in urls.iter().zip(2002..=2020) {
            assert!(url.ends_with(&format!("/CASM_SM_{year}.nc")), "got: {url}");
        }
    }

    #[test]
    fn test_e2e_automated_to_manifest() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let ctx = RecipeContext::for_mode_with(
            ExecutionMode::Automated,
            &catalog(),
            "casm",
            ci_env,
            now,
        )
        .unwrap();
        let graph = assemble(&RecipeBlueprint::default(), &ctx).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("casm.json");
        let mut engine = ManifestEngine::new("manifest", &path);
        let report = engine.submit(&graph).unwrap();
        assert!(report.copy_active);
        assert_eq!(report.inputs, 19);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let stages = json["stages"].as_array().unwrap();
        assert_eq!(stages[6]["kind"], "copy");
        assert_eq!(stages[6]["target"], "s3://bucket/casm.zarr");
        assert_eq!(
            stages[3]["attrs"][BUILD_GIT_HASH_KEY],
            "https://github.com/leap-stc/casm_feedstock/commit/deadbeef"
        );

        let parsed: StageGraph = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, graph);
    }

    #[test]
    fn test_e2e_automated_missing_store_is_fatal() {
        let catalog = Catalog::from_stores(vec![CatalogRecord::new("other", "x")]);
        let ctx = RecipeContext::for_mode_with(
            ExecutionMode::Automated,
            &catalog,
            "casm",
            ci_env,
            Utc::now(),
        )
        .unwrap();
        assert!(matches!(ctx.target, TargetResolution::NotFound { .. }));

        let err = assemble(&RecipeBlueprint::default(), &ctx).unwrap_err();
        match err {
            ContractError::TargetNotFound { id, known_ids } => {
                assert_eq!(id, "casm");
                assert_eq!(known_ids, vec!["other".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_e2e_automated_without_env_is_fatal() {
        let result = RecipeContext::for_mode_with(
            ExecutionMode::Automated,
            &catalog(),
            "casm",
            |var| (var != "GITHUB_SHA").then(|| "x".to_string()),
            Utc::now(),
        );
        assert!(matches!(result, Err(ContractError::MissingEnv { ref var }) if var == "GITHUB_SHA"));
    }

    #[test]
    fn test_e2e_log_engine() {
        let graph = assemble(&RecipeBlueprint::default(), &RecipeContext::local()).unwrap();
        let mut engine = LogEngine::new("log");
        let report = engine.submit(&graph).unwrap();
        assert_eq!(report.stages, 7);
        assert!(!report.copy_active);
    }
}

//! In-repo execution engines
//!
//! - `LogEngine`: logs each stage via tracing
//! - `ManifestEngine`: writes the graph as JSON for an external runner

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use contracts::{ContractError, ExecutionEngine, Stage, StageGraph, SubmitReport};
use observability::record_submission;
use tracing::{info, instrument};

/// Engine that logs the stage graph for inspection
pub struct LogEngine {
    name: String,
}

impl LogEngine {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn log_stage(&self, position: usize, stage: &Stage) {
        match stage {
            Stage::Copy { target: None } => {
                info!(engine = %self.name, position, stage = stage.name(), "copy stage skipped");
            }
            Stage::Copy {
                target: Some(target),
            } => {
                info!(engine = %self.name, position, stage = stage.name(), target = %target, "stage");
            }
            _ => {
                info!(engine = %self.name, position, stage = stage.name(), "stage");
            }
        }
    }
}

impl ExecutionEngine for LogEngine {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(name = "log_engine_submit", skip_all, fields(engine = %self.name, recipe_id = %graph.recipe_id))]
    fn submit(&mut self, graph: &StageGraph) -> Result<SubmitReport, ContractError> {
        info!(
            engine = %self.name,
            inputs = graph.pattern.len(),
            concat_dim = graph.pattern.concat_dim(),
            "stage graph received"
        );
        for (position, stage) in graph.stages.iter().enumerate() {
            self.log_stage(position, stage);
        }

        let report = SubmitReport::for_graph(graph);
        record_submission(&self.name, &report);
        Ok(report)
    }
}

/// Engine that writes the stage graph to a JSON manifest
pub struct ManifestEngine {
    name: String,
    path: PathBuf,
}

impl ManifestEngine {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn write_manifest(&self, graph: &StageGraph) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(writer, graph)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

impl ExecutionEngine for ManifestEngine {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(name = "manifest_engine_submit", skip_all, fields(engine = %self.name, path = %self.path.display()))]
    fn submit(&mut self, graph: &StageGraph) -> Result<SubmitReport, ContractError> {
        self.write_manifest(graph).map_err(|e| {
            ContractError::handoff(
                &self.name,
                format!("failed to write {}: {e}", self.path.display()),
            )
        })?;

        let report = SubmitReport::for_graph(graph);
        record_submission(&self.name, &report);
        info!(
            engine = %self.name,
            path = %self.path.display(),
            stages = report.stages,
            "manifest written"
        );
        Ok(report)
    }
}

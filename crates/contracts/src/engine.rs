//! ExecutionEngine trait - hand-off interface
//!
//! The assembled graph is submitted to an engine that owns scheduling,
//! retries and storage. Implementations in this workspace only describe
//! the graph; a real runner consumes it.

use serde::{Deserialize, Serialize};

use crate::{ContractError, StageGraph};

/// Summary returned after a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReport {
    /// Number of stages submitted
    pub stages: usize,
    /// Number of input files
    pub inputs: usize,
    /// Whether the final copy will run
    pub copy_active: bool,
}

impl SubmitReport {
    pub fn for_graph(graph: &StageGraph) -> Self {
        Self {
            stages: graph.stages.len(),
            inputs: graph.pattern.len(),
            copy_active: graph.is_copy_active(),
        }
    }
}

/// Stage graph consumer
pub trait ExecutionEngine {
    /// Engine name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Submit an assembled graph
    ///
    /// # Errors
    /// Returns a handoff error (should include context)
    fn submit(&mut self, graph: &StageGraph) -> Result<SubmitReport, ContractError>;
}

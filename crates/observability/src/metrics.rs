//! Metric counters
//!
//! Recorded through the `metrics` facade; nothing is exported unless the
//! embedding process installs a recorder.

use contracts::SubmitReport;
use metrics::counter;

/// Record one catalog lookup
pub fn record_lookup(hit: bool) {
    let outcome = if hit { "hit" } else { "miss" };
    counter!("casm_feedstock_lookup_total", "outcome" => outcome).increment(1);
}

/// Record one engine submission
pub fn record_submission(engine: &str, report: &SubmitReport) {
    counter!("casm_feedstock_submissions_total", "engine" => engine.to_string()).increment(1);
    counter!("casm_feedstock_stages_submitted_total").increment(report.stages as u64);
    counter!("casm_feedstock_inputs_submitted_total").increment(report.inputs as u64);
    if !report.copy_active {
        counter!("casm_feedstock_copy_skipped_total").increment(1);
    }
}

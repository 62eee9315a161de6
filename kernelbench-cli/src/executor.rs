//! Benchmark Executor
//!
//! Walks the run plan one size at a time, printing each run as it
//! finishes. A failed run never stops the ones after it.

use crate::planner::RunPlan;
use crate::runner::{Artifact, RunError};
use indicatif::{ProgressBar, ProgressStyle};
use kernelbench_report::{format_run_banner, OutputFormat, RunRecord};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Runs every invocation in a plan against one executable
pub struct Executor {
    binary_path: PathBuf,
    format: OutputFormat,
}

impl Executor {
    /// `binary_path` is where the executable is looked up and spawned from
    pub fn new(binary_path: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            binary_path: binary_path.into(),
            format,
        }
    }

    /// Execute the plan sequentially, in order
    pub fn execute(&self, plan: &RunPlan) -> Vec<RunRecord> {
        let pb = ProgressBar::new(plan.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut records = Vec::with_capacity(plan.len());

        for (size, arg) in plan.invocations() {
            pb.set_message(format!("size {}", arg));
            let record = self.execute_single(plan, size, &arg, &pb);
            self.emit(&record, &pb);
            records.push(record);
            pb.inc(1);
        }

        pb.finish_and_clear();
        records
    }

    /// Run one size, turning every outcome into a record
    fn execute_single(&self, plan: &RunPlan, size: u64, arg: &str, pb: &ProgressBar) -> RunRecord {
        let artifact = match Artifact::locate(&self.binary_path) {
            Ok(artifact) => artifact,
            Err(e) => return self.record_error(plan, size, e),
        };

        if self.format == OutputFormat::Human {
            pb.suspend(|| print!("{}", format_run_banner(&plan.binary, size)));
        }

        match artifact.run(arg) {
            Ok(output) => RunRecord::passed(size, &plan.binary, output.stdout, output.stderr),
            Err(e) => self.record_error(plan, size, e),
        }
    }

    fn record_error(&self, plan: &RunPlan, size: u64, error: RunError) -> RunRecord {
        match error {
            // Already reported on the console for every size
            RunError::MissingArtifact(path) => {
                debug!(size, binary = %path.display(), "benchmark executable missing");
                RunRecord::missing(size, &plan.binary)
            }
            RunError::ExecutionFailed {
                code,
                stdout,
                stderr,
            } => {
                warn!(size, ?code, "benchmark run failed");
                RunRecord::failed(size, &plan.binary, code, stdout, stderr)
            }
            RunError::SpawnFailed(e) => {
                warn!(size, error = %e, "benchmark could not be launched");
                RunRecord::errored(size, &plan.binary, e.to_string())
            }
        }
    }

    fn emit(&self, record: &RunRecord, pb: &ProgressBar) {
        match self.format.render(record) {
            Ok(text) => pb.suspend(|| print!("{}", text)),
            Err(e) => warn!(size = record.size, error = %e, "could not render run record"),
        }
    }
}

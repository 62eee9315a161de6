//! Benchmark Runner
//!
//! Spawns the built executable with one size argument and captures its
//! output. Nothing in the output is interpreted.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("executable '{}' not found", .0.display())]
    MissingArtifact(PathBuf),

    #[error("execution failed with return code {code:?}")]
    ExecutionFailed {
        /// `None` when the process was killed by a signal
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("failed to spawn benchmark: {0}")]
    SpawnFailed(#[from] std::io::Error),
}

/// Captured output of a run that exited with status zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
}

/// An executable that was present on disk when located
#[derive(Debug, Clone)]
pub struct Artifact {
    path: PathBuf,
}

impl Artifact {
    /// Locate the executable. Fails without spawning anything if it is absent.
    pub fn locate(path: impl Into<PathBuf>) -> Result<Self, RunError> {
        let path = path.into();
        if !path.exists() {
            return Err(RunError::MissingArtifact(path));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run once with `arg` as the sole argument, blocking until it exits
    pub fn run(&self, arg: &str) -> Result<RunOutput, RunError> {
        debug!(binary = %self.path.display(), arg, "spawning benchmark");

        let output = Command::new(&self.path)
            .arg(arg)
            .stdin(Stdio::null())
            .output()?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        debug!(status = %output.status, "benchmark exited");

        if output.status.success() {
            Ok(RunOutput { stdout, stderr })
        } else {
            Err(RunError::ExecutionFailed {
                code: output.status.code(),
                stdout,
                stderr,
            })
        }
    }
}

/// Locate and run `executable` with a single argument
pub fn run_benchmark(executable: impl Into<PathBuf>, arg: &str) -> Result<RunOutput, RunError> {
    Artifact::locate(executable)?.run(arg)
}

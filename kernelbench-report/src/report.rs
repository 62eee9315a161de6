//! Run record types

use serde::{Deserialize, Serialize};

/// Outcome of one benchmark invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// Exited with status zero
    Passed,
    /// Exited nonzero or was killed by a signal
    Failed,
    /// Executable was not present, nothing was spawned
    Missing,
    /// The process could not be launched
    Errored,
}

/// Record of a single invocation of the benchmark executable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Input size passed as the sole argument
    pub size: u64,
    /// Executable path as it was invoked
    pub binary: String,
    pub status: RunStatus,
    /// Exit code, `None` when not run or terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    /// Launch error detail for `Errored` runs
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

impl RunRecord {
    pub fn passed(size: u64, binary: impl Into<String>, stdout: String, stderr: String) -> Self {
        Self {
            size,
            binary: binary.into(),
            status: RunStatus::Passed,
            exit_code: Some(0),
            stdout,
            stderr,
            message: None,
        }
    }

    pub fn failed(
        size: u64,
        binary: impl Into<String>,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    ) -> Self {
        Self {
            size,
            binary: binary.into(),
            status: RunStatus::Failed,
            exit_code,
            stdout,
            stderr,
            message: None,
        }
    }

    pub fn missing(size: u64, binary: impl Into<String>) -> Self {
        Self {
            size,
            binary: binary.into(),
            status: RunStatus::Missing,
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            message: None,
        }
    }

    pub fn errored(size: u64, binary: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            size,
            binary: binary.into(),
            status: RunStatus::Errored,
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Passed
    }
}

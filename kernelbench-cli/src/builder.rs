//! Build Orchestrator
//!
//! Runs the external build tool in the working directory. The tool's
//! output goes straight to the terminal.

use crate::config::PipelineConfig;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{descriptor} not found in {}", .dir.display())]
    DescriptorMissing { descriptor: String, dir: PathBuf },

    #[error("build tool '{0}' not found")]
    ToolUnavailable(String),

    #[error("build failed ({0})")]
    Failed(ExitStatus),

    #[error("failed to run build tool '{tool}': {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    /// Message printed to the console before exiting
    pub fn diagnostic(&self) -> String {
        match self {
            BuildError::DescriptorMissing { descriptor, dir } => {
                if dir == Path::new(".") {
                    format!("Error: {} not found in current directory", descriptor)
                } else {
                    format!("Error: {} not found in {}", descriptor, dir.display())
                }
            }
            BuildError::ToolUnavailable(tool) => {
                format!("❌ Error: '{}' command not found. Is it installed?", tool)
            }
            BuildError::Failed(_) => {
                "❌ Build failed. Please fix C++ errors before running benchmarks.".to_string()
            }
            BuildError::Spawn { tool, source } => {
                format!("❌ Error: could not run '{}': {}", tool, source)
            }
        }
    }
}

/// Invokes the build tool against the build descriptor
#[derive(Debug, Clone)]
pub struct BuildOrchestrator {
    root: PathBuf,
    tool: String,
    descriptor: String,
}

impl BuildOrchestrator {
    pub fn new(root: impl Into<PathBuf>, tool: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            tool: tool.into(),
            descriptor: descriptor.into(),
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(&config.root, &config.build_tool, &config.descriptor)
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Run the build. The tool is never spawned if the descriptor is absent.
    pub fn build(&self) -> Result<(), BuildError> {
        if !self.root.join(&self.descriptor).exists() {
            return Err(BuildError::DescriptorMissing {
                descriptor: self.descriptor.clone(),
                dir: self.root.clone(),
            });
        }

        debug!(tool = %self.tool, dir = %self.root.display(), "spawning build tool");

        let status = Command::new(&self.tool)
            .current_dir(&self.root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => BuildError::ToolUnavailable(self.tool.clone()),
                _ => BuildError::Spawn {
                    tool: self.tool.clone(),
                    source: e,
                },
            })?;

        debug!(%status, "build tool exited");

        if !status.success() {
            return Err(BuildError::Failed(status));
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::test_support::write_build_tool;
    use std::fs;
    use tempfile::TempDir;

    fn orchestrator(dir: &TempDir, tool: &Path) -> BuildOrchestrator {
        BuildOrchestrator::new(dir.path(), tool.to_string_lossy(), "Makefile")
    }

    #[test]
    fn test_missing_descriptor_skips_tool() {
        let dir = TempDir::new().unwrap();
        let tool = write_build_tool(dir.path(), 0);

        let err = orchestrator(&dir, &tool).build().unwrap_err();

        assert!(matches!(err, BuildError::DescriptorMissing { .. }));
        assert!(!dir.path().join("build.ran").exists());
    }

    #[test]
    fn test_successful_build() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Makefile"), "all:\n").unwrap();
        let tool = write_build_tool(dir.path(), 0);

        orchestrator(&dir, &tool).build().unwrap();

        assert!(dir.path().join("build.ran").exists());
    }

    #[test]
    fn test_nonzero_exit_is_build_failure() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Makefile"), "all:\n").unwrap();
        let tool = write_build_tool(dir.path(), 2);

        let err = orchestrator(&dir, &tool).build().unwrap_err();

        match err {
            BuildError::Failed(status) => assert_eq!(status.code(), Some(2)),
            other => panic!("expected build failure, got {:?}", other),
        }
        assert!(dir.path().join("build.ran").exists());
    }

    #[test]
    fn test_unknown_tool_is_unavailable() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Makefile"), "all:\n").unwrap();

        let err = BuildOrchestrator::new(dir.path(), "kernelbench-no-such-build-tool", "Makefile")
            .build()
            .unwrap_err();

        assert!(matches!(err, BuildError::ToolUnavailable(ref t) if t == "kernelbench-no-such-build-tool"));
        assert!(err.diagnostic().contains("command not found"));
    }

    #[test]
    fn test_non_executable_tool_is_spawn_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Makefile"), "all:\n").unwrap();
        let tool = dir.path().join("not-executable");
        fs::write(&tool, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o644)).unwrap();

        let err = orchestrator(&dir, &tool).build().unwrap_err();

        match &err {
            BuildError::Spawn { source, .. } => {
                assert_eq!(source.kind(), ErrorKind::PermissionDenied)
            }
            other => panic!("expected spawn error, got {:?}", other),
        }
        assert!(err.diagnostic().starts_with("❌ Error: could not run"));
    }

    #[test]
    fn test_diagnostic_for_current_directory() {
        let err = BuildError::DescriptorMissing {
            descriptor: "Makefile".to_string(),
            dir: PathBuf::from("."),
        };
        assert_eq!(err.diagnostic(), "Error: Makefile not found in current directory");
    }
}

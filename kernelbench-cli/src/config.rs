//! Pipeline Configuration
//!
//! Defaults reproduce the fixed behaviour of running the tool with no
//! arguments. The CLI only ever overrides individual fields.

use std::path::{Path, PathBuf};

/// Build tool invoked with no arguments
pub const DEFAULT_BUILD_TOOL: &str = "make";
/// File the build tool reads
pub const DEFAULT_DESCRIPTOR: &str = "Makefile";
/// Where the build is expected to leave the benchmark executable
pub const DEFAULT_BINARY: &str = "./build/alpaka_test_kernel";
/// Input sizes, run in this order
pub const DEFAULT_SIZES: [u64; 3] = [1024, 2048, 4096];

/// Everything the driver needs to build and run the benchmark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Working directory holding the build descriptor
    pub root: PathBuf,
    pub build_tool: String,
    pub descriptor: String,
    /// Executable path, relative to `root` unless absolute
    pub binary: PathBuf,
    pub sizes: Vec<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            build_tool: DEFAULT_BUILD_TOOL.to_string(),
            descriptor: DEFAULT_DESCRIPTOR.to_string(),
            binary: PathBuf::from(DEFAULT_BINARY),
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }
}

impl PipelineConfig {
    /// Config rooted at `root` with every other field defaulted
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn descriptor_path(&self) -> PathBuf {
        self.root.join(&self.descriptor)
    }

    /// Path used to locate and spawn the executable.
    ///
    /// Always carries a directory component, so spawning never falls back
    /// to a `$PATH` lookup of a bare name.
    pub fn binary_path(&self) -> PathBuf {
        if self.binary.is_absolute() {
            self.binary.clone()
        } else if self.root == Path::new(".") {
            if self.binary.parent() == Some(Path::new("")) {
                Path::new(".").join(&self.binary)
            } else {
                self.binary.clone()
            }
        } else {
            self.root.join(&self.binary)
        }
    }

    /// Executable path as the user wrote it, for console messages
    pub fn binary_display(&self) -> String {
        self.binary.display().to_string()
    }
}

//! kernelbench Report - Run Records and Rendering
//!
//! Renders the outcome of each benchmark invocation:
//! - Human (console text, the default)
//! - JSON lines (one object per run)
//!
//! Records hold the raw captured output only. Nothing here parses timing
//! data out of it.

mod human;
mod json;
mod report;

pub use human::{format_human_record, format_run_banner};
pub use json::generate_json_record;
pub use report::{RunRecord, RunStatus};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Console text
    #[default]
    Human,
    /// One compact JSON object per run
    Json,
}

impl OutputFormat {
    /// Render a single record in this format
    pub fn render(self, record: &RunRecord) -> Result<String, serde_json::Error> {
        match self {
            OutputFormat::Human => Ok(format_human_record(record)),
            OutputFormat::Json => generate_json_record(record).map(|line| line + "\n"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

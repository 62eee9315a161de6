//! Console output
//!
//! Mirrors what a user watching the terminal expects to see for each run.

use crate::report::{RunRecord, RunStatus};

/// Line announcing an invocation, printed before the process starts
pub fn format_run_banner(binary: &str, size: u64) -> String {
    format!("🚀 Running {} with args: [{}]...\n", binary, size)
}

/// Format a finished run for the terminal
pub fn format_human_record(record: &RunRecord) -> String {
    let mut output = String::new();

    match record.status {
        RunStatus::Passed => {
            output.push_str("--- Output ---\n");
            output.push_str(&record.stdout);
            output.push('\n');
        }
        RunStatus::Failed => {
            match record.exit_code {
                Some(code) => output.push_str(&format!(
                    "❌ Execution failed with return code {}\n",
                    code
                )),
                None => output.push_str("❌ Execution terminated by a signal (no return code)\n"),
            }
            output.push_str(&format!("Stderr: {}\n", record.stderr));
        }
        RunStatus::Missing => {
            output.push_str(&format!(
                "❌ Error: Executable '{}' not found after build.\n",
                record.binary
            ));
        }
        RunStatus::Errored => {
            output.push_str(&format!(
                "❌ Error: could not launch '{}': {}\n",
                record.binary,
                record.message.as_deref().unwrap_or("unknown error")
            ));
        }
    }

    output
}

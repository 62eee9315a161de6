//! Run Planner
//!
//! Turns the configured sizes into the ordered list of invocations for
//! the benchmark phase.

use crate::config::PipelineConfig;

/// Execution plan for the benchmark phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    /// Executable as displayed to the user
    pub binary: String,
    /// Sizes in invocation order
    pub sizes: Vec<u64>,
}

impl RunPlan {
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Each size paired with the argument text handed to the executable
    pub fn invocations(&self) -> impl Iterator<Item = (u64, String)> + '_ {
        self.sizes.iter().map(|&size| (size, size.to_string()))
    }
}

/// Build the plan. Order is kept exactly as given, duplicates included.
pub fn build_plan(binary: impl Into<String>, sizes: impl IntoIterator<Item = u64>) -> RunPlan {
    RunPlan {
        binary: binary.into(),
        sizes: sizes.into_iter().collect(),
    }
}

/// Render the plan for `--dry-run`
pub fn format_plan(config: &PipelineConfig, plan: &RunPlan) -> String {
    let mut output = String::new();

    output.push_str("kernelbench plan:\n");
    output.push_str(&format!(
        "├── build: {} ({} in {})\n",
        config.build_tool,
        config.descriptor,
        config.root.display()
    ));
    output.push_str(&format!("└── run: {}\n", plan.binary));
    for (_, arg) in plan.invocations() {
        output.push_str(&format!("    ├── [{}]\n", arg));
    }
    output.push_str(&format!("{} runs planned.\n", plan.len()));

    output
}

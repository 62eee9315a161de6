//! kernelbench CLI Library
//!
//! Builds a native benchmark kernel with `make`, then runs the resulting
//! executable once per input size and prints whatever it writes to
//! stdout.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     kernelbench_cli::run()
//! }
//! ```

mod builder;
mod config;
mod executor;
mod planner;
mod runner;

#[cfg(all(test, unix))]
mod test_support;

pub use builder::{BuildError, BuildOrchestrator};
pub use config::*;
pub use executor::Executor;
pub use planner::{build_plan, format_plan, RunPlan};
pub use runner::{run_benchmark, Artifact, RunError, RunOutput};

use clap::Parser;
use kernelbench_report::{OutputFormat, RunRecord};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// kernelbench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "kernelbench")]
#[command(author, version, about = "Build a benchmark kernel with make and run it across input sizes")]
pub struct Cli {
    /// Working directory containing the build descriptor
    #[arg(short = 'C', long = "dir", default_value = ".")]
    pub dir: PathBuf,

    /// Build tool to invoke (no arguments are passed)
    #[arg(long, default_value = DEFAULT_BUILD_TOOL)]
    pub build_tool: String,

    /// Build descriptor that must exist before building
    #[arg(long, default_value = DEFAULT_DESCRIPTOR)]
    pub descriptor: String,

    /// Benchmark executable produced by the build
    #[arg(long, default_value = DEFAULT_BINARY)]
    pub binary: PathBuf,

    /// Input sizes, run in the order given
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES.to_vec())]
    pub sizes: Vec<u64>,

    /// Output format for each run: human, json
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Print the plan without building or running anything
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            root: self.dir.clone(),
            build_tool: self.build_tool.clone(),
            descriptor: self.descriptor.clone(),
            binary: self.binary.clone(),
            sizes: self.sizes.clone(),
        }
    }
}

/// Run the kernelbench CLI with the process arguments.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the kernelbench CLI with pre-parsed arguments.
///
/// Exits the process with code 1 if the build phase fails. Failed
/// benchmark runs do not change the exit code.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    let config = cli.pipeline_config();

    if cli.dry_run {
        let plan = build_plan(config.binary_display(), config.sizes.clone());
        print!("{}", format_plan(&config, &plan));
        return Ok(());
    }

    match run_pipeline(&config, cli.format) {
        Ok(records) => {
            let passed = records.iter().filter(|r| r.is_success()).count();
            info!(runs = records.len(), passed, "benchmark phase complete");
            Ok(())
        }
        Err(e) => {
            println!("{}", e.diagnostic());
            std::process::exit(1);
        }
    }
}

/// Build once, then run every configured size in order.
///
/// Returns the build error without entering the benchmark phase if the
/// build fails.
pub fn run_pipeline(
    config: &PipelineConfig,
    format: OutputFormat,
) -> Result<Vec<RunRecord>, BuildError> {
    let builder = BuildOrchestrator::from_config(config);

    println!("Building project with {}...", builder.tool());
    builder.build()?;
    println!("✅ Build successful\n");

    let plan = build_plan(config.binary_display(), config.sizes.clone());
    if plan.is_empty() {
        println!("No input sizes configured.");
        return Ok(Vec::new());
    }

    let executor = Executor::new(config.binary_path(), format);
    Ok(executor.execute(&plan))
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "kernelbench=debug"
    } else {
        "kernelbench=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Already installed when called more than once in a process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

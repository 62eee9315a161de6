//! kernelbench - build a benchmark kernel, then run it across input sizes

fn main() -> anyhow::Result<()> {
    kernelbench_cli::run()
}

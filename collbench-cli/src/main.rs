//! collbench binary entry point.

fn main() -> anyhow::Result<()> {
    collbench_cli::run()
}

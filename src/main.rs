use std::io::{self, BufWriter};

use gridbench::{BenchConfig, BenchError, run_benchmark, write_report};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), BenchError> {
    // Fixed filter: the binary reads no environment. stdout is the report only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let report = run_benchmark(&BenchConfig::default())?;
    write_report(&report, BufWriter::new(io::stdout().lock()))?;

    Ok(())
}

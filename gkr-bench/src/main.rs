use anyhow::Result;
use clap::Parser;
use gkr_bench::config::{DEFAULT_EXECUTABLE, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, DEFAULT_ROUNDS};
use gkr_bench::{BenchConfig, ExternalProver, Runner};
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;
use utils::BenchReport;

/// Benchmark an external GKR prover over a range of input sizes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Prover binary, invoked as `<executable> <size> <result_file>`
    #[arg(long, env = "GKR_BENCH_EXECUTABLE", default_value = DEFAULT_EXECUTABLE)]
    executable: PathBuf,

    /// First size to benchmark (inclusive)
    #[arg(long, env = "GKR_BENCH_MIN_SIZE", default_value_t = DEFAULT_MIN_SIZE)]
    min_size: u32,

    /// Last size to benchmark (exclusive)
    #[arg(long, env = "GKR_BENCH_MAX_SIZE", default_value_t = DEFAULT_MAX_SIZE)]
    max_size: u32,

    /// Prover invocations per size
    #[arg(long, short = 'r', env = "GKR_BENCH_ROUNDS", default_value_t = DEFAULT_ROUNDS)]
    rounds: u32,

    /// Directory for the temporary result file
    #[arg(long, env = "GKR_BENCH_WORK_DIR", default_value = ".")]
    work_dir: PathBuf,

    /// Also write the averaged results as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print a summary table once every size has been measured
    #[arg(long)]
    summary: bool,
}

impl Args {
    fn config(&self) -> BenchConfig {
        BenchConfig {
            executable: self.executable.clone(),
            sizes: self.min_size..self.max_size,
            rounds: self.rounds,
            work_dir: self.work_dir.clone(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = args.config();
    let prover = ExternalProver::new(&config.executable);
    let mut runner = Runner::new(config, prover)?;
    info!(
        "{} prover invocations scheduled",
        runner.config().total_invocations()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = runner.run(&mut out)?;

    if args.summary {
        writeln!(out)?;
        writeln!(out, "{}", utils::summary_table(report.summary_rows()))?;
    }

    if let Some(path) = &args.json {
        utils::write_json(&BenchReport::new(report.measurements()), path)?;
        info!("wrote {}", path.display());
    }

    Ok(())
}

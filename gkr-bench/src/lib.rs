//! Benchmark driver for an external GKR prover binary.
//!
//! The prover is invoked as `<executable> <size> <result_file>` and must write a
//! single line `verifier_time proof_size prover_time` to `result_file` before it
//! exits. The [`Runner`] repeats this for every size in the configured range,
//! averages the reported metrics and prints them.

pub mod config;
pub mod prover;
pub mod report;
pub mod result_file;
pub mod runner;

pub use config::BenchConfig;
pub use prover::{ExternalProver, Prover, ProverError};
pub use report::{Measurement, SizeAverages, SummaryRow, SweepReport};
pub use result_file::{ResultFileError, Sample};
pub use runner::Runner;

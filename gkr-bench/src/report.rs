use serde::Serialize;
use serde_with::{DurationNanoSeconds, serde_as, skip_serializing_none};
use std::path::PathBuf;
use std::time::Duration;
use tabled::Tabled;

use crate::result_file::Sample;

/// Running sums for one size; reset whenever a new size starts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accumulator {
    prover_time: f64,
    verifier_time: f64,
    proof_size: f64,
}

impl Accumulator {
    pub fn add(&mut self, sample: &Sample) {
        self.prover_time += sample.prover_time;
        self.verifier_time += sample.verifier_time;
        self.proof_size += sample.proof_size;
    }

    pub fn average(&self, size: u32, rounds: u32) -> SizeAverages {
        let n = f64::from(rounds);
        SizeAverages {
            size,
            rounds,
            prover_time: self.prover_time / n,
            verifier_time: self.verifier_time / n,
            proof_size: self.proof_size / n,
        }
    }
}

/// Averaged metrics for a single size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeAverages {
    pub size: u32,
    pub rounds: u32,
    /// Seconds.
    pub prover_time: f64,
    /// Seconds.
    pub verifier_time: f64,
    /// Bytes.
    pub proof_size: f64,
}

/// Outcome of a completed sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    /// Result file used as the hand-off with the prover; already deleted.
    pub result_file: PathBuf,
    pub sizes: Vec<SizeAverages>,
}

impl SweepReport {
    pub fn measurements(&self) -> Vec<Measurement> {
        self.sizes.iter().map(Measurement::from).collect()
    }

    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        self.sizes.iter().map(SummaryRow::from).collect()
    }
}

/// JSON form of [`SizeAverages`].
///
/// Durations are written in nanoseconds. A time the prover reported as
/// negative or non-finite cannot be represented and is omitted.
#[serde_as]
#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Measurement {
    pub size: u32,
    pub rounds: u32,
    #[serde_as(as = "Option<DurationNanoSeconds>")]
    pub prover_duration: Option<Duration>,
    #[serde_as(as = "Option<DurationNanoSeconds>")]
    pub verify_duration: Option<Duration>,
    pub proof_size: f64,
}

impl From<&SizeAverages> for Measurement {
    fn from(avg: &SizeAverages) -> Self {
        Self {
            size: avg.size,
            rounds: avg.rounds,
            prover_duration: Duration::try_from_secs_f64(avg.prover_time).ok(),
            verify_duration: Duration::try_from_secs_f64(avg.verifier_time).ok(),
            proof_size: avg.proof_size,
        }
    }
}

#[derive(Tabled, Debug, Clone, PartialEq)]
pub struct SummaryRow {
    size: u32,
    rounds: u32,
    #[tabled(rename = "prover (s)")]
    prover_time: String,
    #[tabled(rename = "verifier (s)")]
    verifier_time: String,
    #[tabled(rename = "proof size (bytes)")]
    proof_size: String,
}

impl From<&SizeAverages> for SummaryRow {
    fn from(avg: &SizeAverages) -> Self {
        Self {
            size: avg.size,
            rounds: avg.rounds,
            prover_time: format!("{:.6}", avg.prover_time),
            verifier_time: format!("{:.6}", avg.verifier_time),
            proof_size: format!("{:.1}", avg.proof_size),
        }
    }
}

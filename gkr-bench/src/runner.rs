use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::BenchConfig;
use crate::prover::Prover;
use crate::report::{Accumulator, SizeAverages, SweepReport};
use crate::result_file::{read_result_file, result_file_name};

/// Drives a [`Prover`] over every size of a [`BenchConfig`], one invocation at
/// a time, and prints the averaged metrics of each size to `out`.
pub struct Runner<P> {
    config: BenchConfig,
    prover: P,
    label: String,
}

impl<P: Prover> Runner<P> {
    pub fn new(config: BenchConfig, prover: P) -> Result<Self> {
        config.validate()?;
        let label = config.label();
        Ok(Self {
            config,
            prover,
            label,
        })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run the sweep with a freshly generated result file under the work dir.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<SweepReport> {
        let name = result_file_name(&mut rand::thread_rng());
        let result_file = self.config.work_dir.join(name);
        self.run_with_result_file(&result_file, out)
    }

    /// Run the sweep using `result_file` as the hand-off with the prover.
    ///
    /// The file is deleted once every size has been measured; failing to
    /// delete it is an error. If the sweep itself fails the file is removed on
    /// a best-effort basis and the sweep error is returned.
    pub fn run_with_result_file<W: Write>(
        &mut self,
        result_file: &Path,
        out: &mut W,
    ) -> Result<SweepReport> {
        info!(
            "benchmarking {} over sizes {}..{} ({} rounds each, result file {})",
            self.label,
            self.config.sizes.start,
            self.config.sizes.end,
            self.config.rounds,
            result_file.display()
        );

        let sizes = match self.sweep(result_file, out) {
            Ok(sizes) => sizes,
            Err(e) => {
                if let Err(cleanup) = remove_if_exists(result_file) {
                    warn!(
                        "failed to remove result file {}: {cleanup}",
                        result_file.display()
                    );
                }
                return Err(e);
            }
        };

        fs::remove_file(result_file).with_context(|| {
            format!("Failed to remove result file {}", result_file.display())
        })?;
        info!("finished {} sizes", sizes.len());

        Ok(SweepReport {
            result_file: result_file.to_path_buf(),
            sizes,
        })
    }

    fn sweep<W: Write>(&mut self, result_file: &Path, out: &mut W) -> Result<Vec<SizeAverages>> {
        let mut averages = Vec::with_capacity(self.config.sizes.len());
        for size in self.config.sizes.clone() {
            averages.push(self.bench_size(size, result_file, out)?);
        }
        Ok(averages)
    }

    fn bench_size<W: Write>(
        &mut self,
        size: u32,
        result_file: &Path,
        out: &mut W,
    ) -> Result<SizeAverages> {
        writeln!(out, "bench {} of size {}", self.label, size)?;

        let rounds = self.config.rounds;
        let mut acc = Accumulator::default();
        for round in 0..rounds {
            // Never read output left behind by an earlier round.
            remove_if_exists(result_file).with_context(|| {
                format!("Failed to clear stale result file {}", result_file.display())
            })?;

            self.prover
                .prove(size, result_file)
                .with_context(|| format!("prover failed at size {size}, round {round}"))?;
            let sample = read_result_file(result_file)
                .with_context(|| format!("bad prover output at size {size}, round {round}"))?;
            debug!("size {size} round {round}: {sample:?}");

            acc.add(&sample);
        }

        let avg = acc.average(size, rounds);
        writeln!(out, "prover time: {} s", avg.prover_time)?;
        writeln!(out, "verifier time: {} s", avg.verifier_time)?;
        writeln!(out, "proof size: {} bytes", avg.proof_size)?;
        out.flush()?;

        Ok(avg)
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

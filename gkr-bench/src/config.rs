use anyhow::{Result, bail};
use std::ops::Range;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXECUTABLE: &str = "./fft_gkr";
pub const DEFAULT_MIN_SIZE: u32 = 5;
pub const DEFAULT_MAX_SIZE: u32 = 20;
pub const DEFAULT_ROUNDS: u32 = 10;

/// Parameters of a benchmark sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Prover binary, invoked as `<executable> <size> <result_file>`.
    pub executable: PathBuf,
    /// Sizes to benchmark, visited in ascending order.
    pub sizes: Range<u32>,
    /// Invocations per size; the averaging denominator.
    pub rounds: u32,
    /// Directory in which the shared result file is created.
    pub work_dir: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            sizes: DEFAULT_MIN_SIZE..DEFAULT_MAX_SIZE,
            rounds: DEFAULT_ROUNDS,
            work_dir: PathBuf::from("."),
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            bail!("rounds must be at least 1");
        }
        if self.sizes.is_empty() {
            bail!(
                "size range {}..{} is empty",
                self.sizes.start,
                self.sizes.end
            );
        }
        Ok(())
    }

    /// Name printed in the per-size header, taken from the executable's file stem.
    pub fn label(&self) -> String {
        label_for(&self.executable)
    }

    pub fn total_invocations(&self) -> u64 {
        self.sizes.len() as u64 * u64::from(self.rounds)
    }
}

fn label_for(executable: &Path) -> String {
    executable
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "prover".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_sweep() {
        let config = BenchConfig::default();
        assert_eq!(config.executable, PathBuf::from("./fft_gkr"));
        assert_eq!(config.sizes, 5..20);
        assert_eq!(config.rounds, 10);
        assert_eq!(config.total_invocations(), 150);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let config = BenchConfig {
            rounds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("rounds"));
    }

    #[test]
    fn test_empty_size_range_rejected() {
        let config = BenchConfig {
            sizes: 7..7,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_label_from_executable() {
        assert_eq!(BenchConfig::default().label(), "fft_gkr");

        let config = BenchConfig {
            executable: PathBuf::from("/opt/bin/virgo_gkr.exe"),
            ..Default::default()
        };
        assert_eq!(config.label(), "virgo_gkr");

        let config = BenchConfig {
            executable: PathBuf::from("/"),
            ..Default::default()
        };
        assert_eq!(config.label(), "prover");
    }
}

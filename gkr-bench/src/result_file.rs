use rand::Rng;
use std::fs;
use std::io;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};
use thiserror::Error;

const NAME_LEN: usize = 20;
const FIELDS: [&str; 3] = ["verifier_time", "proof_size", "prover_time"];

/// Metrics reported by one prover invocation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    /// Seconds.
    pub verifier_time: f64,
    /// Bytes.
    pub proof_size: f64,
    /// Seconds.
    pub prover_time: f64,
}

#[derive(Debug, Error)]
pub enum ResultFileError {
    #[error("failed to read result file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("result file is empty")]
    Empty,
    #[error("expected 3 fields (verifier_time proof_size prover_time), found {found}")]
    FieldCount { found: usize },
    #[error("{field} is not a number: {value:?}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Random result-file name: 20 lowercase ASCII letters followed by `.txt`.
pub fn result_file_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut name: String = (0..NAME_LEN)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect();
    name.push_str(".txt");
    name
}

/// Parse `verifier_time proof_size prover_time`, in that order.
pub fn parse_result_line(line: &str) -> Result<Sample, ResultFileError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(ResultFileError::Empty);
    }
    let &[verifier_time, proof_size, prover_time] = tokens.as_slice() else {
        return Err(ResultFileError::FieldCount {
            found: tokens.len(),
        });
    };

    Ok(Sample {
        verifier_time: parse_field(FIELDS[0], verifier_time)?,
        proof_size: parse_field(FIELDS[1], proof_size)?,
        prover_time: parse_field(FIELDS[2], prover_time)?,
    })
}

/// Read and parse the first line of the result file at `path`.
pub fn read_result_file(path: &Path) -> Result<Sample, ResultFileError> {
    let contents = fs::read_to_string(path).map_err(|source| ResultFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let line = contents.lines().next().ok_or(ResultFileError::Empty)?;
    parse_result_line(line)
}

fn parse_field(field: &'static str, value: &str) -> Result<f64, ResultFileError> {
    value
        .parse::<f64>()
        .map_err(|source| ResultFileError::InvalidNumber {
            field,
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_keeps_field_order() {
        let sample = parse_result_line("0.01 128 0.05").unwrap();
        assert_eq!(
            sample,
            Sample {
                verifier_time: 0.01,
                proof_size: 128.0,
                prover_time: 0.05,
            }
        );
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        let sample = parse_result_line("  1.5e-3\t4096   2.25 \r").unwrap();
        assert_eq!(sample.verifier_time, 1.5e-3);
        assert_eq!(sample.proof_size, 4096.0);
        assert_eq!(sample.prover_time, 2.25);
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        assert!(matches!(
            parse_result_line("0.01 128"),
            Err(ResultFileError::FieldCount { found: 2 })
        ));
        assert!(matches!(
            parse_result_line("0.01 128 0.05 7"),
            Err(ResultFileError::FieldCount { found: 4 })
        ));
    }

    #[test]
    fn test_parse_rejects_empty_line() {
        assert!(matches!(parse_result_line(""), Err(ResultFileError::Empty)));
        assert!(matches!(
            parse_result_line("   "),
            Err(ResultFileError::Empty)
        ));
    }

    #[test]
    fn test_parse_names_invalid_field() {
        let err = parse_result_line("0.01 big 0.05").unwrap_err();
        match err {
            ResultFileError::InvalidNumber { field, value, .. } => {
                assert_eq!(field, "proof_size");
                assert_eq!(value, "big");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_uses_first_line_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.txt");
        fs::write(&path, "0.5 64 1.5\ngarbage\n").unwrap();

        let sample = read_result_file(&path).unwrap();
        assert_eq!(sample.prover_time, 1.5);
    }

    #[test]
    fn test_read_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.txt");
        fs::write(&path, "").unwrap();

        assert!(matches!(
            read_result_file(&path),
            Err(ResultFileError::Empty)
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never_written.txt");

        match read_result_file(&path) {
            Err(ResultFileError::Io { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_result_file_name_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let name = result_file_name(&mut rng);

        let stem = name.strip_suffix(".txt").unwrap();
        assert_eq!(stem.len(), 20);
        assert!(stem.bytes().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn test_result_file_names_are_randomized() {
        let mut rng = rand::thread_rng();
        let first = result_file_name(&mut rng);
        let second = result_file_name(&mut rng);
        assert_ne!(first, second);
    }
}

use anyhow::Result;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// One prover invocation for a given size.
///
/// Implementations must have finished writing `result_file` when `prove`
/// returns; the runner reads it immediately afterwards without any further
/// synchronisation.
pub trait Prover {
    fn prove(&mut self, size: u32, result_file: &Path) -> Result<()>;
}

impl<F> Prover for F
where
    F: FnMut(u32, &Path) -> Result<()>,
{
    fn prove(&mut self, size: u32, result_file: &Path) -> Result<()> {
        self(size, result_file)
    }
}

#[derive(Debug, Error)]
pub enum ProverError {
    #[error("failed to spawn {}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} exited with {status} for size {size}", .program.display())]
    Exit {
        program: PathBuf,
        size: u32,
        status: ExitStatus,
    },
}

/// Runs a prover binary as `<program> [args..] <size> <result_file>` and waits
/// for it to exit. The child inherits stdout and stderr.
#[derive(Debug, Clone)]
pub struct ExternalProver {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ExternalProver {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Extra argument placed before the size, e.g. a script for an interpreter.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Prover for ExternalProver {
    fn prove(&mut self, size: u32, result_file: &Path) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(size.to_string())
            .arg(result_file)
            .status()
            .map_err(|source| ProverError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(ProverError::Exit {
                program: self.program.clone(),
                size,
                status,
            }
            .into());
        }
        Ok(())
    }
}

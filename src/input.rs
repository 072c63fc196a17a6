//! Resolution of the byte source to colorize.

use std::io::{self, BufRead, Cursor};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::{ColorDiffError, DiffCommandError};

/// Something that can produce unified diff text for two files
pub trait DiffProducer {
    /// Unified diff of `old` against `new`.
    ///
    /// An empty result means the files have no differences.
    fn unified_diff(&self, old: &Path, new: &Path) -> Result<Vec<u8>, DiffCommandError>;
}

/// Runs an external `diff -u` and captures its standard output
#[derive(Debug, Clone)]
pub struct DiffCommand {
    program: PathBuf,
}

impl DiffCommand {
    /// Use the given executable instead of `diff` from `PATH`
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for DiffCommand {
    fn default() -> Self {
        Self::new("diff")
    }
}

impl DiffProducer for DiffCommand {
    fn unified_diff(&self, old: &Path, new: &Path) -> Result<Vec<u8>, DiffCommandError> {
        log::debug!(
            "running {} -u {} {}",
            self.program.display(),
            old.display(),
            new.display()
        );

        let output = Command::new(&self.program)
            .arg("-u")
            .arg(old)
            .arg(new)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| DiffCommandError::SpawnFailed {
                message: e.to_string(),
            })?;

        log::debug!(
            "{} exited with {} after {} bytes",
            self.program.display(),
            output.status,
            output.stdout.len()
        );

        // diff exits 1 when the inputs differ, so only a failure that produced
        // nothing at all is treated as an error
        if !output.status.success() && output.stdout.is_empty() {
            return Err(DiffCommandError::ExitedEmpty {
                status: output.status.to_string(),
            });
        }

        Ok(output.stdout)
    }
}

/// Where the diff text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Unified diff piped into standard input
    Stdin,
    /// Diff two files with a [`DiffProducer`]
    Files { old: PathBuf, new: PathBuf },
}

impl Input {
    /// Pick the source from the positional arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ColorDiffError::Usage`] unless there are zero or two arguments.
    pub fn from_args(mut files: Vec<PathBuf>) -> Result<Self, ColorDiffError> {
        match files.len() {
            0 => Ok(Input::Stdin),
            2 => {
                let new = files.pop().ok_or(ColorDiffError::Usage)?;
                let old = files.pop().ok_or(ColorDiffError::Usage)?;
                Ok(Input::Files { old, new })
            }
            _ => Err(ColorDiffError::Usage),
        }
    }

    /// Open the byte source.
    ///
    /// For [`Input::Files`] the producer runs to completion before this
    /// returns; its whole output is buffered in memory.
    pub fn open<P: DiffProducer>(
        &self,
        producer: &P,
    ) -> Result<Box<dyn BufRead>, DiffCommandError> {
        match self {
            Input::Stdin => {
                log::debug!("reading diff from stdin");
                Ok(Box::new(io::stdin().lock()))
            }
            Input::Files { old, new } => {
                let diff = producer.unified_diff(old, new)?;
                Ok(Box::new(Cursor::new(diff)))
            }
        }
    }
}

use error_set::error_set;
use std::io::Write;

pub mod classify;
pub mod colorize;
pub mod input;
pub mod style;

pub use colorize::{Outcome, colorize};
pub use input::{DiffCommand, DiffProducer, Input};

error_set! {
    /// Top-level error for colordiff
    ColorDiffError := {
        #[display("usage: colordiff file1 file2\nor: diff -u file1 file2 | colordiff")]
        Usage,
    } || DiffCommandError || ScanError

    /// Errors from running the external diff utility
    DiffCommandError := {
        #[display("Failed to run diff: {message}")]
        SpawnFailed { message: String },
        #[display("diff failed without output: {status}")]
        ExitedEmpty { status: String },
    }

    /// Errors while reading diff lines or writing colored output
    ScanError := {
        #[display("Failed to read diff input: {message}")]
        ReadFailed { message: String },
        #[display("Failed to write colored output: {message}")]
        WriteFailed { message: String },
        /// The reader of our output went away, e.g. `colordiff a b | head`
        #[display("Output closed before the diff was fully written")]
        OutputClosed,
    }
}

/// Main interface for colordiff operations
///
/// # Examples
/// ```no_run
/// # use colordiff::{ColorDiff, DiffCommand, Input};
/// use std::path::PathBuf;
///
/// let input = Input::from_args(vec![PathBuf::from("old.txt"), PathBuf::from("new.txt")]).unwrap();
/// let outcome = ColorDiff::new(DiffCommand::default())
///     .run(&input, std::io::stdout().lock())
///     .unwrap();
/// std::process::exit(outcome.exit_code().into());
/// ```
pub struct ColorDiff<P> {
    producer: P,
}

impl<P: DiffProducer> ColorDiff<P> {
    /// Create a colorizer that diffs files with `producer`
    pub fn new(producer: P) -> Self {
        Self { producer }
    }

    /// Resolve `input` and colorize the diff it selects into `output`.
    ///
    /// Nothing is written when the diff cannot be produced.
    pub fn run<W: Write>(&self, input: &Input, output: W) -> Result<Outcome, ColorDiffError> {
        let source = input.open(&self.producer)?;
        Ok(colorize(source, output)?)
    }
}

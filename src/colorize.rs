use std::io::{self, BufRead, Write};

use crate::ScanError;
use crate::classify::{LineKind, classify, split_hunk_range};
use crate::style::Role;

/// Result of a colorizing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The input had no lines at all
    NoDifferences,
    /// At least one line was colorized
    DifferencesPresent,
}

impl Outcome {
    /// Process exit status, following `diff`'s convention of 1 for "inputs differ"
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::NoDifferences => 0,
            Outcome::DifferencesPresent => 1,
        }
    }
}

/// Append the colored rendering of one line (without terminator) to `out`,
/// followed by a single line feed
pub fn render_line(line: &[u8], out: &mut Vec<u8>) {
    match classify(line) {
        LineKind::Blank => {}
        LineKind::FileHeader => Role::FileName.paint(line, out),
        LineKind::Removed => Role::Removed.paint(line, out),
        LineKind::Added => Role::Added.paint(line, out),
        LineKind::HunkRange => match split_hunk_range(line) {
            Some((range, rest)) => {
                Role::ContextRange.paint(range, out);
                out.extend_from_slice(rest);
            }
            None => out.extend_from_slice(line),
        },
        LineKind::Context => out.extend_from_slice(line),
        LineKind::Other => Role::Meta.paint(line, out),
    }
    out.push(b'\n');
}

/// Colorize unified diff text from `input` into `output`, line by line.
///
/// Lines are split on `\n`; a `\r` right before it is dropped, and a final
/// line without a terminator still counts as a line. Each input line yields
/// exactly one output line.
///
/// # Errors
///
/// Returns [`ScanError`] if reading the input or writing the output fails.
pub fn colorize<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<Outcome, ScanError> {
    let mut line = Vec::new();
    let mut text = Vec::new();
    let mut scanned = 0usize;

    loop {
        line.clear();
        let read = input
            .read_until(b'\n', &mut line)
            .map_err(|e| ScanError::ReadFailed {
                message: e.to_string(),
            })?;
        if read == 0 {
            break;
        }

        text.clear();
        render_line(trim_line_ending(&line), &mut text);
        output.write_all(&text).map_err(write_error)?;
        scanned += 1;
    }

    output.flush().map_err(write_error)?;

    log::debug!("colorized {} lines", scanned);

    Ok(if scanned == 0 {
        Outcome::NoDifferences
    } else {
        Outcome::DifferencesPresent
    })
}

fn write_error(e: io::Error) -> ScanError {
    if e.kind() == io::ErrorKind::BrokenPipe {
        ScanError::OutputClosed
    } else {
        ScanError::WriteFailed {
            message: e.to_string(),
        }
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

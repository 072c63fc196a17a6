use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use colordiff::{ColorDiff, ColorDiffError, DiffCommand, Input, Outcome};

#[derive(Parser)]
#[command(name = "colordiff", version)]
#[command(about = "Colorize unified diff output")]
#[command(after_help = "Pipe a unified diff in (diff -u a b | colordiff) or pass two files.")]
struct Cli {
    /// Files to compare with `diff -u`; omit both to read a diff from stdin
    files: Vec<PathBuf>,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", conflicts_with = "files")]
    completions: Option<Shell>,

    /// Print a man page and exit
    #[arg(long, hide = true, conflicts_with_all = ["files", "completions"])]
    man: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            log::debug!("rejected arguments: {}", err);
            return report(ColorDiffError::Usage);
        }
    };

    if let Some(shell) = cli.completions {
        let mut script = Vec::new();
        clap_complete::generate(shell, &mut Cli::command(), "colordiff", &mut script);
        return emit(&script, "completion script");
    }

    if cli.man {
        let mut page = Vec::new();
        if let Err(e) = clap_mangen::Man::new(Cli::command()).render(&mut page) {
            eprintln!("Failed to render man page: {}", e);
            return ExitCode::FAILURE;
        }
        return emit(&page, "man page");
    }

    match run(cli.files) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => report(err),
    }
}

fn run(files: Vec<PathBuf>) -> Result<Outcome, ColorDiffError> {
    let input = Input::from_args(files)?;
    ColorDiff::new(DiffCommand::default()).run(&input, BufWriter::new(io::stdout().lock()))
}

/// Write generated text to stdout; a closed pipe fails quietly
fn emit(text: &[u8], what: &str) -> ExitCode {
    let mut stdout = io::stdout().lock();
    match stdout.write_all(text).and_then(|()| stdout.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("stdout closed while writing {}", what);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Failed to write {}: {}", what, e);
            ExitCode::FAILURE
        }
    }
}

fn report(err: ColorDiffError) -> ExitCode {
    // like diff killed by SIGPIPE: stop without a message
    if matches!(err, ColorDiffError::OutputClosed) {
        log::debug!("{}", err);
    } else {
        eprintln!("{}", err);
    }
    ExitCode::FAILURE
}

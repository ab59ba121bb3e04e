//! CLI for mdnum-cite - Number citation placeholder links in Markdown documents.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use mdnum_tools::{CitationNumberer, InputError, LineReader};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Rewrite `[citation](...)` links as numbered references and expand the
/// `*INSERT REFERENCES HERE*` marker into a reference table
#[derive(Parser)]
#[command(name = "mdnum-cite")]
#[command(version)]
#[command(after_help = "\
Examples:
  mdnum-cite draft.md
  mdnum-cite intro.md body.md > numbered.md
  cat draft.md | mdnum-cite")]
struct Cli {
    /// Input files, concatenated in order (use '-' or no arguments for stdin)
    files: Vec<PathBuf>,
}

// ---------------------------------------------------------------------------
// AppError
// ---------------------------------------------------------------------------

enum AppError {
    /// Input file or stdin could not be read
    Input(InputError),
    /// Output stream could not be written
    Output(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Input(e) => write!(f, "{}", e),
            AppError::Output(e) => write!(f, "stdout: {}", e),
        }
    }
}

impl From<InputError> for AppError {
    fn from(e: InputError) -> Self {
        AppError::Input(e)
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut numberer = CitationNumberer::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in LineReader::open(&cli.files) {
        let line = line?;
        out.write_all(numberer.process_line(&line).as_bytes())
            .map_err(AppError::Output)?;
    }

    Ok(())
}

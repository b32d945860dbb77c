use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use ron_decoder::{ErrorView, ViewOptions, decode_message, error::DEFAULT_VIEW_WINDOW};
use tracing_subscriber::EnvFilter;

/// Decode server replies, one RON literal per line
#[derive(Debug, Parser)]
#[command(name = "ron-decode", version)]
struct Args {
    /// file to read replies from, stdin if omitted
    file: Option<PathBuf>,

    /// print the decoded reply instead of the user-facing text
    #[arg(long)]
    raw: bool,

    /// disable ansi color in error output
    #[arg(long)]
    no_color: bool,

    /// maximum number of characters of an input line shown under an error
    #[arg(long, default_value_t = DEFAULT_VIEW_WINDOW)]
    window: usize,
}

impl Args {
    fn view_options(&self) -> ViewOptions {
        ViewOptions {
            window: self.window,
            color: !self.no_color,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let reader: Box<dyn BufRead> = match &args.file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let failures = run(reader, &mut io::stdout().lock(), &mut io::stderr().lock(), &args)?;

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Decode every non-blank line of `reader`, returning how many lines failed
///
/// Decoded replies go to `out`, rendered errors to `err`.
fn run(
    reader: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
    args: &Args,
) -> anyhow::Result<usize> {
    let options = args.view_options();
    let mut failures = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", idx + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        // one bad reply does not stop the rest
        match decode_message(&line) {
            Ok(message) if args.raw => writeln!(out, "{message}")?,
            Ok(message) => writeln!(out, "{}", message.describe())?,
            Err(e) => {
                failures += 1;
                tracing::warn!(line = idx + 1, kind = ?e.kind(), "could not decode reply");
                writeln!(err, "{}", ErrorView::new(&e, &line, options))?;
            }
        }
    }

    tracing::info!(failures, "finished decoding replies");

    Ok(failures)
}

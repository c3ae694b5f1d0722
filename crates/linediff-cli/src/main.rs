mod cli;
mod input;
mod render;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser as _;
use linediff::{calculate_diff_stats, compute_diff};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let differs = run(&cli, &mut io::stdout().lock())?;

    if cli.exit_code && differs {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .try_init();
}

/// Diffs the two inputs and writes the rendering. Returns whether they differ.
fn run(cli: &Cli, out: &mut impl Write) -> Result<bool> {
    let (original, modified) = input::read_pair(&cli.original, &cli.modified, cli.max_lines)?;

    let options = cli.diff_options();
    let entries = compute_diff(&original, &modified, options);
    let stats = calculate_diff_stats(&entries);
    tracing::info!(
        unchanged = stats.unchanged,
        added = stats.added,
        removed = stats.removed,
        "diff complete"
    );

    let output = render::render(cli.format, &entries, options, cli.context)?;
    writeln!(out, "{output}").context("failed to write diff")?;

    Ok(stats.has_changes())
}

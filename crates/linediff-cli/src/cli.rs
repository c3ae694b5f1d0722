use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use linediff::DiffOptions;

pub const DEFAULT_MAX_LINES: usize = 20_000;

#[derive(Debug, Parser)]
#[command(
    name = "linediff",
    version,
    about = "Compare two texts line by line"
)]
pub struct Cli {
    /// Original text file, or `-` for stdin
    pub original: PathBuf,

    /// Modified text file, or `-` for stdin
    pub modified: PathBuf,

    /// Compare lines with surrounding whitespace trimmed and inner runs collapsed
    #[arg(short = 'w', long)]
    pub ignore_whitespace: bool,

    /// Compare lines case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only print changed regions with this many lines of context (text format)
    #[arg(short = 'C', long, value_name = "LINES")]
    pub context: Option<usize>,

    /// Refuse inputs with more lines than this; 0 disables the limit
    #[arg(long, env = "LINEDIFF_MAX_LINES", default_value_t = DEFAULT_MAX_LINES)]
    pub max_lines: usize,

    /// Exit with status 1 when the texts differ
    #[arg(long)]
    pub exit_code: bool,
}

impl Cli {
    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            ignore_whitespace: self.ignore_whitespace,
            ignore_case: self.ignore_case,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Prefixed listing, one line per entry
    Text,
    /// Side-by-side columns
    Split,
    /// Entries, stats and split view as JSON
    Json,
    /// Counts only
    Stats,
}

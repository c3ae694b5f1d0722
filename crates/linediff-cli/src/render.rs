use anyhow::{Context as _, Result, bail};
use linediff::{
    DiffEntry, DiffOptions, DiffStats, SplitCell, SplitRowKind, SplitView, build_split_view,
    calculate_diff_stats, format_diff_as_text, group_hunks,
};
use serde::Serialize;

use crate::cli::OutputFormat;

const HUNK_SEPARATOR: &str = "...";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    options: DiffOptions,
    stats: DiffStats,
    entries: &'a [DiffEntry],
    split: SplitView,
}

pub fn render(
    format: OutputFormat,
    entries: &[DiffEntry],
    options: DiffOptions,
    context: Option<usize>,
) -> Result<String> {
    if context.is_some() && format != OutputFormat::Text {
        bail!("--context only applies to the text format");
    }

    let output = match format {
        OutputFormat::Text => match context {
            Some(context_lines) => render_hunks(entries, context_lines),
            None => format_diff_as_text(entries),
        },
        OutputFormat::Split => render_split(&build_split_view(entries)),
        OutputFormat::Json => {
            let report = JsonReport {
                options,
                stats: calculate_diff_stats(entries),
                entries,
                split: build_split_view(entries),
            };
            serde_json::to_string_pretty(&report).context("failed to serialize diff report")?
        }
        OutputFormat::Stats => render_stats(&calculate_diff_stats(entries)),
    };
    Ok(output)
}

fn render_hunks(entries: &[DiffEntry], context_lines: usize) -> String {
    group_hunks(entries, context_lines)
        .iter()
        .map(|hunk| format_diff_as_text(&hunk.entries))
        .collect::<Vec<_>>()
        .join(&format!("\n{HUNK_SEPARATOR}\n"))
}

fn render_split(view: &SplitView) -> String {
    let width = view
        .left
        .iter()
        .flatten()
        .map(|cell| cell.content.chars().count())
        .max()
        .unwrap_or(0);

    view.rows()
        .map(|row| {
            let marker = match row.kind() {
                SplitRowKind::Unchanged => ' ',
                SplitRowKind::Added => '+',
                SplitRowKind::Removed => '-',
                SplitRowKind::Modified => '~',
            };
            let line = format!(
                "{marker} {:>4} | {:<width$} || {:>4} | {}",
                line_number(row.left),
                content(row.left),
                line_number(row.right),
                content(row.right),
            );
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_stats(stats: &DiffStats) -> String {
    format!(
        "unchanged: {}\nadded: {}\nremoved: {}\ntotal: {}",
        stats.unchanged, stats.added, stats.removed, stats.total
    )
}

fn line_number(cell: Option<&SplitCell>) -> String {
    cell.and_then(|cell| cell.line_number)
        .map(|n| n.to_string())
        .unwrap_or_default()
}

fn content(cell: Option<&SplitCell>) -> &str {
    cell.map(|cell| cell.content.as_str()).unwrap_or_default()
}

use crate::model::DiffEntry;

/// Renders one `"  "`, `"+ "` or `"- "` prefixed line per entry, joined by LF.
///
/// This is a display listing. It carries no hunk headers or ranges and is not
/// meant to be applied as a patch.
pub fn format_diff_as_text(entries: &[DiffEntry]) -> String {
    entries
        .iter()
        .map(|entry| entry.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

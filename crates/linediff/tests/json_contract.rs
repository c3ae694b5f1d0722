use anyhow::Result;
use linediff::{DiffEntry, DiffOptions, build_split_view, calculate_diff_stats, compute_diff};
use serde_json::json;

#[test]
fn edit_script_serializes_for_callers() -> Result<()> {
    let entries = compute_diff("line1\noriginal", "line1\nmodified", DiffOptions::default());
    assert_eq!(
        serde_json::to_value(&entries)?,
        json!([
            {"type": "unchanged", "content": "line1", "oldLineNumber": 1, "newLineNumber": 1},
            {"type": "removed", "content": "original", "oldLineNumber": 2},
            {"type": "added", "content": "modified", "newLineNumber": 2},
        ])
    );
    Ok(())
}

#[test]
fn stats_and_split_view_serialize_for_callers() -> Result<()> {
    let entries = compute_diff("a\nb", "a", DiffOptions::default());

    assert_eq!(
        serde_json::to_value(calculate_diff_stats(&entries))?,
        json!({"unchanged": 1, "added": 0, "removed": 1, "total": 2})
    );
    assert_eq!(
        serde_json::to_value(build_split_view(&entries))?,
        json!({
            "left": [
                {"type": "unchanged", "content": "a", "lineNumber": 1},
                {"type": "removed", "content": "b", "lineNumber": 2},
            ],
            "right": [
                {"type": "unchanged", "content": "a", "lineNumber": 1},
                null,
            ],
        })
    );
    Ok(())
}

#[test]
fn entries_read_back_from_caller_json() -> Result<()> {
    let entries: Vec<DiffEntry> = serde_json::from_str(
        r#"[{"type": "unchanged", "content": "same"}, {"type": "added", "content": "new", "newLineNumber": 1}]"#,
    )?;
    assert_eq!(entries[0].old_line_number, None);
    assert_eq!(entries[1], DiffEntry::added("new", 1));
    Ok(())
}

#[test]
fn options_read_from_caller_json() -> Result<()> {
    let options: DiffOptions = serde_json::from_str(r#"{"ignoreWhitespace": true}"#)?;
    let entries = compute_diff("  x  ", "x", options);
    assert_eq!(entries, vec![DiffEntry::unchanged("  x  ", 1, 1)]);
    Ok(())
}

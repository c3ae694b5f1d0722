use std::ops::Range;

use crate::document::Document;
use crate::lcs::compute_lcs;
use crate::model::{DiffEntry, DiffOptions};
use crate::tokenize::{comparison_key, tokenize};

/// Computes the line edit script turning `original` into `modified`.
///
/// ```
/// use linediff::{DiffEntry, DiffOptions, compute_diff};
///
/// let entries = compute_diff("line1\noriginal", "line1\nmodified", DiffOptions::default());
/// assert_eq!(
///     entries,
///     vec![
///         DiffEntry::unchanged("line1", 1, 1),
///         DiffEntry::removed("original", 2),
///         DiffEntry::added("modified", 2),
///     ]
/// );
/// ```
pub fn compute_diff(original: &str, modified: &str, options: DiffOptions) -> Vec<DiffEntry> {
    diff_lines(&tokenize(original), &tokenize(modified), options)
}

pub fn diff_documents(old: &Document, new: &Document, options: DiffOptions) -> Vec<DiffEntry> {
    diff_lines(&old.lines(), &new.lines(), options)
}

/// Builds the edit script for two already tokenized line sequences.
///
/// Within every gap between matched lines, all removed lines come before all
/// added lines. Matched lines keep the original side's content.
pub fn diff_lines(
    old_lines: &[String],
    new_lines: &[String],
    options: DiffOptions,
) -> Vec<DiffEntry> {
    let old_keys: Vec<_> = old_lines
        .iter()
        .map(|line| comparison_key(line, options))
        .collect();
    let new_keys: Vec<_> = new_lines
        .iter()
        .map(|line| comparison_key(line, options))
        .collect();

    let pairs = compute_lcs(&old_keys, &new_keys);
    let mut entries = Vec::with_capacity(old_lines.len() + new_lines.len() - pairs.len());

    let mut old_cursor = 0;
    let mut new_cursor = 0;
    for pair in &pairs {
        push_gap(
            &mut entries,
            old_lines,
            old_cursor..pair.old_index,
            new_lines,
            new_cursor..pair.new_index,
        );
        entries.push(DiffEntry::unchanged(
            old_lines[pair.old_index].clone(),
            pair.old_index + 1,
            pair.new_index + 1,
        ));
        old_cursor = pair.old_index + 1;
        new_cursor = pair.new_index + 1;
    }
    push_gap(
        &mut entries,
        old_lines,
        old_cursor..old_lines.len(),
        new_lines,
        new_cursor..new_lines.len(),
    );

    tracing::debug!(
        old_lines = old_lines.len(),
        new_lines = new_lines.len(),
        matched = pairs.len(),
        ignore_whitespace = options.ignore_whitespace,
        ignore_case = options.ignore_case,
        "computed line diff"
    );

    entries
}

fn push_gap(
    entries: &mut Vec<DiffEntry>,
    old_lines: &[String],
    old_range: Range<usize>,
    new_lines: &[String],
    new_range: Range<usize>,
) {
    for old_index in old_range {
        entries.push(DiffEntry::removed(old_lines[old_index].clone(), old_index + 1));
    }
    for new_index in new_range {
        entries.push(DiffEntry::added(new_lines[new_index].clone(), new_index + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DiffEntryKind;

    fn kinds(entries: &[DiffEntry]) -> Vec<DiffEntryKind> {
        entries.iter().map(|entry| entry.kind).collect()
    }

    fn count(entries: &[DiffEntry], kind: DiffEntryKind) -> usize {
        entries.iter().filter(|entry| entry.kind == kind).count()
    }

    #[test]
    fn appended_line_is_added() {
        let entries = compute_diff("line1\nline2", "line1\nline2\nline3", DiffOptions::default());
        assert_eq!(
            entries,
            vec![
                DiffEntry::unchanged("line1", 1, 1),
                DiffEntry::unchanged("line2", 2, 2),
                DiffEntry::added("line3", 3),
            ]
        );
    }

    #[test]
    fn changed_line_is_removed_then_added() {
        let entries = compute_diff("line1\noriginal", "line1\nmodified", DiffOptions::default());
        assert_eq!(
            kinds(&entries),
            vec![
                DiffEntryKind::Unchanged,
                DiffEntryKind::Removed,
                DiffEntryKind::Added,
            ]
        );
        assert_eq!(entries[1], DiffEntry::removed("original", 2));
        assert_eq!(entries[2], DiffEntry::added("modified", 2));
    }

    #[test]
    fn empty_texts_are_one_unchanged_line() {
        let entries = compute_diff("", "", DiffOptions::default());
        assert_eq!(entries, vec![DiffEntry::unchanged("", 1, 1)]);
    }

    #[test]
    fn disjoint_texts_remove_all_then_add_all() {
        let entries = compute_diff("a\nb", "c\nd\ne", DiffOptions::default());
        assert_eq!(
            entries,
            vec![
                DiffEntry::removed("a", 1),
                DiffEntry::removed("b", 2),
                DiffEntry::added("c", 1),
                DiffEntry::added("d", 2),
                DiffEntry::added("e", 3),
            ]
        );
    }

    #[test]
    fn gap_lists_removed_before_added() {
        let entries = compute_diff("keep\nx\ny\nend", "keep\nz\nend", DiffOptions::default());
        assert_eq!(
            entries,
            vec![
                DiffEntry::unchanged("keep", 1, 1),
                DiffEntry::removed("x", 2),
                DiffEntry::removed("y", 3),
                DiffEntry::added("z", 2),
                DiffEntry::unchanged("end", 4, 3),
            ]
        );
    }

    #[test]
    fn ignore_whitespace_matches_more_lines() {
        let strict = compute_diff("line1\n  line2  ", "line1\nline2", DiffOptions::default());
        let loose = compute_diff(
            "line1\n  line2  ",
            "line1\nline2",
            DiffOptions {
                ignore_whitespace: true,
                ignore_case: false,
            },
        );
        assert_eq!(count(&strict, DiffEntryKind::Unchanged), 1);
        assert_eq!(count(&loose, DiffEntryKind::Unchanged), 2);
    }

    #[test]
    fn normalized_match_displays_original_content() {
        let entries = compute_diff(
            "  Hello   World",
            "hello world",
            DiffOptions {
                ignore_whitespace: true,
                ignore_case: true,
            },
        );
        assert_eq!(entries, vec![DiffEntry::unchanged("  Hello   World", 1, 1)]);
    }

    #[test]
    fn ignore_case_alone_keeps_whitespace_significant() {
        let options = DiffOptions {
            ignore_whitespace: false,
            ignore_case: true,
        };
        let entries = compute_diff("ABC\n x", "abc\nx", options);
        assert_eq!(
            entries,
            vec![
                DiffEntry::unchanged("ABC", 1, 1),
                DiffEntry::removed(" x", 2),
                DiffEntry::added("x", 2),
            ]
        );
    }

    #[test]
    fn documents_diff_like_text() {
        let old = Document::from_str("a\nb\n");
        let new = Document::from_str("a\nc\n");
        assert_eq!(
            diff_documents(&old, &new, DiffOptions::default()),
            compute_diff("a\nb\n", "a\nc\n", DiffOptions::default())
        );
    }
}

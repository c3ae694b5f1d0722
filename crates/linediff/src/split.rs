use crate::model::{DiffEntry, DiffEntryKind, SplitCell, SplitView};

/// Lays an edit script out as two row-aligned columns.
///
/// Unchanged entries occupy both sides of one row. Each run of removed and
/// added entries between unchanged anchors takes `max(removed, added)` rows,
/// removed lines on the left and added lines on the right, with the shorter
/// side padded by `None`.
pub fn build_split_view(entries: &[DiffEntry]) -> SplitView {
    let mut view = SplitView::default();
    let mut removed = Vec::new();
    let mut added = Vec::new();

    for entry in entries {
        match entry.kind {
            DiffEntryKind::Unchanged => {
                flush_gap(&mut view, &mut removed, &mut added);
                view.left.push(Some(cell(entry, entry.old_line_number)));
                view.right.push(Some(cell(entry, entry.new_line_number)));
            }
            DiffEntryKind::Removed => removed.push(entry),
            DiffEntryKind::Added => added.push(entry),
        }
    }
    flush_gap(&mut view, &mut removed, &mut added);

    view
}

fn flush_gap(view: &mut SplitView, removed: &mut Vec<&DiffEntry>, added: &mut Vec<&DiffEntry>) {
    let row_len = removed.len().max(added.len());
    for offset in 0..row_len {
        view.left
            .push(removed.get(offset).map(|entry| cell(entry, entry.old_line_number)));
        view.right
            .push(added.get(offset).map(|entry| cell(entry, entry.new_line_number)));
    }
    removed.clear();
    added.clear();
}

fn cell(entry: &DiffEntry, line_number: Option<usize>) -> SplitCell {
    SplitCell {
        kind: entry.kind,
        content: entry.content.clone(),
        line_number,
    }
}

use std::ops::Range;

use crate::model::{DiffEntry, DiffEntryKind, DiffHunk};

/// Groups changed entries into hunks with up to `context_lines` unchanged
/// entries on each side.
///
/// Hunks whose context windows touch or overlap are merged. Starts are 1-based
/// and point at the next line of that side when the hunk has none of its own.
pub fn group_hunks(entries: &[DiffEntry], context_lines: usize) -> Vec<DiffHunk> {
    let mut windows: Vec<Range<usize>> = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        if !entry.is_change() {
            continue;
        }

        let start = index.saturating_sub(context_lines);
        let end = index.saturating_add(context_lines).saturating_add(1).min(entries.len());
        match windows.last_mut() {
            Some(last) if start <= last.end => last.end = last.end.max(end),
            _ => windows.push(start..end),
        }
    }

    let mut hunks = Vec::with_capacity(windows.len());
    let mut consumed = SideCounts::default();
    let mut cursor = 0;
    for window in windows {
        consumed.add(&entries[cursor..window.start]);
        let inside = SideCounts::of(&entries[window.clone()]);

        hunks.push(DiffHunk {
            old_start: consumed.old + 1,
            old_len: inside.old,
            new_start: consumed.new + 1,
            new_len: inside.new,
            entries: entries[window.clone()].to_vec(),
        });

        consumed.old += inside.old;
        consumed.new += inside.new;
        cursor = window.end;
    }

    hunks
}

#[derive(Clone, Copy, Debug, Default)]
struct SideCounts {
    old: usize,
    new: usize,
}

impl SideCounts {
    fn of(entries: &[DiffEntry]) -> Self {
        let mut counts = Self::default();
        counts.add(entries);
        counts
    }

    fn add(&mut self, entries: &[DiffEntry]) {
        for entry in entries {
            match entry.kind {
                DiffEntryKind::Unchanged => {
                    self.old += 1;
                    self.new += 1;
                }
                DiffEntryKind::Removed => self.old += 1,
                DiffEntryKind::Added => self.new += 1,
            }
        }
    }
}

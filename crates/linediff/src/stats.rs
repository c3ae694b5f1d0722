use crate::model::{DiffEntry, DiffEntryKind, DiffStats};

pub fn calculate_diff_stats(entries: &[DiffEntry]) -> DiffStats {
    let mut stats = DiffStats::default();
    for entry in entries {
        match entry.kind {
            DiffEntryKind::Unchanged => stats.unchanged += 1,
            DiffEntryKind::Added => stats.added += 1,
            DiffEntryKind::Removed => stats.removed += 1,
        }
    }
    stats.total = stats.unchanged + stats.added + stats.removed;
    stats
}

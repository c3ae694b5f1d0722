pub mod diff;
pub mod document;
pub mod format;
pub mod hunk;
pub mod lcs;
pub mod model;
pub mod split;
pub mod stats;
pub mod tokenize;

pub use diff::{compute_diff, diff_documents, diff_lines};
pub use document::Document;
pub use format::format_diff_as_text;
pub use hunk::group_hunks;
pub use lcs::{MatchedPair, compute_lcs};
pub use model::{
    DiffEntry, DiffEntryKind, DiffHunk, DiffOptions, DiffStats, SplitCell, SplitRow, SplitRowKind,
    SplitView,
};
pub use split::build_split_view;
pub use stats::calculate_diff_stats;
pub use tokenize::{comparison_key, tokenize};

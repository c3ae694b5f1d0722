use std::fmt;

use serde::{Deserialize, Serialize};

/// Comparison policy for matching lines.
///
/// Normalization only affects which lines are considered equal. Displayed
/// content is always the original line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiffOptions {
    pub ignore_whitespace: bool,
    pub ignore_case: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffEntryKind {
    Unchanged,
    Added,
    Removed,
}

impl DiffEntryKind {
    /// Two-character marker used by the plain-text listing.
    pub fn prefix(self) -> &'static str {
        match self {
            DiffEntryKind::Unchanged => "  ",
            DiffEntryKind::Added => "+ ",
            DiffEntryKind::Removed => "- ",
        }
    }
}

/// One line of an edit script.
///
/// Line numbers are 1-based. Unchanged entries carry both, removed entries
/// only `old_line_number`, added entries only `new_line_number`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffEntry {
    #[serde(rename = "type")]
    pub kind: DiffEntryKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_line_number: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_line_number: Option<usize>,
}

impl DiffEntry {
    pub fn unchanged(
        content: impl Into<String>,
        old_line_number: usize,
        new_line_number: usize,
    ) -> Self {
        Self {
            kind: DiffEntryKind::Unchanged,
            content: content.into(),
            old_line_number: Some(old_line_number),
            new_line_number: Some(new_line_number),
        }
    }

    pub fn removed(content: impl Into<String>, old_line_number: usize) -> Self {
        Self {
            kind: DiffEntryKind::Removed,
            content: content.into(),
            old_line_number: Some(old_line_number),
            new_line_number: None,
        }
    }

    pub fn added(content: impl Into<String>, new_line_number: usize) -> Self {
        Self {
            kind: DiffEntryKind::Added,
            content: content.into(),
            old_line_number: None,
            new_line_number: Some(new_line_number),
        }
    }

    pub fn is_change(&self) -> bool {
        self.kind != DiffEntryKind::Unchanged
    }
}

impl fmt::Display for DiffEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.content)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub unchanged: usize,
    pub added: usize,
    pub removed: usize,
    pub total: usize,
}

impl DiffStats {
    pub fn has_changes(&self) -> bool {
        self.added > 0 || self.removed > 0
    }
}

/// A single rendered side of a split row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitCell {
    #[serde(rename = "type")]
    pub kind: DiffEntryKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
}

/// Two row-aligned columns. `None` marks a padding cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitView {
    pub left: Vec<Option<SplitCell>>,
    pub right: Vec<Option<SplitCell>>,
}

impl SplitView {
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = SplitRow<'_>> + '_ {
        self.left
            .iter()
            .zip(self.right.iter())
            .map(|(left, right)| SplitRow {
                left: left.as_ref(),
                right: right.as_ref(),
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitRow<'a> {
    pub left: Option<&'a SplitCell>,
    pub right: Option<&'a SplitCell>,
}

impl SplitRow<'_> {
    pub fn kind(&self) -> SplitRowKind {
        match (self.left, self.right) {
            (Some(left), Some(right)) => {
                if left.kind == DiffEntryKind::Unchanged && right.kind == DiffEntryKind::Unchanged {
                    SplitRowKind::Unchanged
                } else {
                    SplitRowKind::Modified
                }
            }
            (Some(_), None) => SplitRowKind::Removed,
            (None, Some(_)) => SplitRowKind::Added,
            (None, None) => SplitRowKind::Unchanged,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitRowKind {
    Unchanged,
    Added,
    Removed,
    Modified,
}

/// A window of an edit script with its surrounding context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffHunk {
    pub old_start: usize,
    pub old_len: usize,
    pub new_start: usize,
    pub new_len: usize,
    pub entries: Vec<DiffEntry>,
}

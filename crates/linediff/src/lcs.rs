//! Longest common subsequence over arbitrary comparable items.
//!
//! Uses the textbook O(n·m) dynamic-programming table followed by a
//! backtrack from the bottom-right corner. Memory grows with the product of
//! both input lengths; callers diffing very large texts should bound input
//! size before calling in.

/// Indices (0-based) of one matched element in each sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MatchedPair {
    pub old_index: usize,
    pub new_index: usize,
}

/// Computes a longest common subsequence of `a` and `b`.
///
/// The returned pairs are strictly increasing in both indices. When several
/// subsequences share the maximal length, the backtrack prefers consuming an
/// element of `a` (moving up the table) on ties.
pub fn compute_lcs<T: PartialEq>(a: &[T], b: &[T]) -> Vec<MatchedPair> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let table = LcsTable::build(a, b);
    let mut pairs = Vec::with_capacity(table.get(a.len(), b.len()));

    let mut i = a.len();
    let mut j = b.len();
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            pairs.push(MatchedPair {
                old_index: i - 1,
                new_index: j - 1,
            });
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) >= table.get(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    pairs.reverse();
    pairs
}

/// Row-major `(n + 1) × (m + 1)` table of prefix LCS lengths.
struct LcsTable {
    width: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let width = b.len() + 1;
        let mut table = Self {
            width,
            cells: vec![0; (a.len() + 1) * width],
        };
        tracing::trace!(rows = a.len() + 1, columns = width, "building lcs table");

        for i in 1..=a.len() {
            for j in 1..=b.len() {
                let value = if a[i - 1] == b[j - 1] {
                    table.get(i - 1, j - 1) + 1
                } else {
                    table.get(i - 1, j).max(table.get(i, j - 1))
                };
                table.cells[i * width + j] = value;
            }
        }

        table
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j]
    }
}

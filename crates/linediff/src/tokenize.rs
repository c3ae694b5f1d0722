use std::borrow::Cow;

use crate::document::Document;
use crate::model::DiffOptions;

/// Splits `text` on LF. Never returns an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    Document::from_str(text).lines()
}

/// Normalized form of `line` used for equality during matching.
///
/// With `ignore_whitespace` the line is trimmed and inner whitespace runs
/// collapse to one space; `ignore_case` then lowercases the result.
pub fn comparison_key(line: &str, options: DiffOptions) -> Cow<'_, str> {
    let mut key = Cow::Borrowed(line);

    if options.ignore_whitespace {
        key = Cow::Owned(collapse_whitespace(&key));
    }
    if options.ignore_case {
        key = Cow::Owned(key.to_lowercase());
    }

    key
}

fn collapse_whitespace(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for word in line.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const IGNORE_WHITESPACE: DiffOptions = DiffOptions {
        ignore_whitespace: true,
        ignore_case: false,
    };

    const IGNORE_CASE: DiffOptions = DiffOptions {
        ignore_whitespace: false,
        ignore_case: true,
    };

    #[test]
    fn tokenize_splits_on_lf_only() {
        assert_eq!(tokenize("line1\nline2"), vec!["line1", "line2"]);
        assert_eq!(tokenize(""), vec![""]);
        assert_eq!(tokenize("\n"), vec!["", ""]);
        assert_eq!(tokenize("  padded  "), vec!["  padded  "]);
    }

    #[test]
    fn key_is_borrowed_without_options() {
        let key = comparison_key("  Mixed  Case ", DiffOptions::default());
        assert!(matches!(key, Cow::Borrowed(_)));
        assert_eq!(key, "  Mixed  Case ");
    }

    #[test]
    fn whitespace_is_trimmed_and_collapsed() {
        assert_eq!(comparison_key("  a \t b   c  ", IGNORE_WHITESPACE), "a b c");
        assert_eq!(comparison_key(" \t ", IGNORE_WHITESPACE), "");
    }

    #[test]
    fn case_is_lowered_after_whitespace() {
        let both = DiffOptions {
            ignore_whitespace: true,
            ignore_case: true,
        };
        assert_eq!(comparison_key(" Hello   World ", both), "hello world");
        assert_eq!(comparison_key(" Hello ", IGNORE_CASE), " hello ");
    }
}

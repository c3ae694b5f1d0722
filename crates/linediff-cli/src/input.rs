use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context as _, Result, bail};

const STDIN_MARKER: &str = "-";

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_MARKER
}

/// Reads both sides of the comparison. At most one of them may be stdin.
pub fn read_pair(original: &Path, modified: &Path, max_lines: usize) -> Result<(String, String)> {
    if is_stdin(original) && is_stdin(modified) {
        bail!("only one of the inputs can be read from stdin");
    }

    let original_text = read_input(original, max_lines)?;
    let modified_text = read_input(modified, max_lines)?;
    Ok((original_text, modified_text))
}

pub fn read_input(path: &Path, max_lines: usize) -> Result<String> {
    let text = if is_stdin(path) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        text
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };

    check_line_limit(&text, max_lines).with_context(|| format!("input {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read input");
    Ok(text)
}

/// The LCS table grows with the product of both line counts, so large inputs
/// are rejected up front.
pub fn check_line_limit(text: &str, max_lines: usize) -> Result<()> {
    if max_lines == 0 {
        return Ok(());
    }

    let lines = text.bytes().filter(|&b| b == b'\n').count() + 1;
    if lines > max_lines {
        bail!("{lines} lines exceeds the limit of {max_lines} (see --max-lines)");
    }
    Ok(())
}

use ropey::{LineType, Rope, RopeSlice};

/// Text held as a rope and addressed by LF-separated lines.
///
/// A document always has at least one line: the empty text is a single empty
/// line, and a trailing LF opens a final empty line. Carriage returns are
/// content, not line terminators.
#[derive(Clone, Debug)]
pub struct Document {
    rope: Rope,
}

impl Document {
    pub fn from_str(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len() == 0
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines(LineType::LF)
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .map(|index| self.line_without_terminator(index).to_string())
            .collect()
    }

    fn line_without_terminator(&self, index: usize) -> RopeSlice<'_> {
        let line = self.rope.line(index, LineType::LF);
        if line.len() > 0 {
            let line_end = line.len() - 1;
            if line.is_char_boundary(line_end) && line.char(line_end) == '\n' {
                return line.slice(..line_end);
            }
        }
        line
    }
}

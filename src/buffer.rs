// buffer.rs - Tail-edited line buffer backed by a rope

use ropey::Rope;

/// Null key code delivered for non-printable keys; never stored.
pub const SENTINEL: char = '\0';

/// Ordered rows of code points. Rows are the LF-separated lines of the rope, so an empty
/// rope is one empty row and the buffer can never hold zero rows.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    rope: Rope,
    modified: bool,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            modified: false,
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buffer = Self::new();
        buffer.load(lines);
        buffer
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Replace the whole document. No lines at all yields a single empty row; a line that
    /// itself contains LF ends up as several rows.
    pub fn load<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (idx, line) in lines.into_iter().enumerate() {
            if idx > 0 {
                text.push('\n');
            }
            text.push_str(line.as_ref());
        }
        self.rope = Rope::from_str(&text);
        self.modified = false;
    }

    /// Append `ch` to the last row. The sentinel and row terminators are refused.
    pub fn append_char(&mut self, ch: char) -> bool {
        if ch == SENTINEL || ch == '\n' || ch == '\r' {
            return false;
        }
        self.rope.insert_char(self.rope.len_chars(), ch);
        self.touch();
        true
    }

    pub fn append_row(&mut self) {
        self.rope.insert_char(self.rope.len_chars(), '\n');
        self.touch();
    }

    /// Backspace at the tail: drops the last character of the last row, or the last row
    /// itself once it is empty. A lone empty row stays.
    pub fn delete_last_char(&mut self) -> bool {
        let len = self.rope.len_chars();
        if len == 0 {
            return false;
        }
        // An empty last row is preceded by its LF, so one removal covers both cases.
        self.rope.remove(len - 1..len);
        self.touch();
        true
    }

    pub fn serialize(&self) -> Vec<String> {
        self.rows().collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.rope.lines().map(|line| {
            let mut text = line.to_string();
            if text.ends_with('\n') {
                text.pop();
            }
            text
        })
    }

    pub fn row_count(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn last_row_index(&self) -> usize {
        self.row_count() - 1
    }

    pub fn row(&self, idx: usize) -> Option<String> {
        if idx < self.row_count() {
            let mut text = self.rope.line(idx).to_string();
            if text.ends_with('\n') {
                text.pop();
            }
            Some(text)
        } else {
            None
        }
    }

    /// Length of a row in code points, excluding its terminator.
    pub fn row_len(&self, idx: usize) -> usize {
        if idx >= self.row_count() {
            return 0;
        }
        let line = self.rope.line(idx);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    fn touch(&mut self) {
        self.modified = true;
    }
}

use crate::buffer::LineBuffer;

/// Insertion point while editing. Always derived from the buffer, never moved on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    /// One past the last character of the last row.
    pub fn at_tail(buffer: &LineBuffer) -> Self {
        let row = buffer.last_row_index();
        Self {
            row,
            col: buffer.row_len(row),
        }
    }
}

use crate::cursor::Cursor;

/// Visible window over the buffer. Offsets count rows and code points, `cols` counts
/// screen columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub offset_row: usize,
    pub offset_col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            offset_row: 0,
            offset_col: 0,
            rows,
            cols,
        }
    }

    /// Anchored at the top-left when there is no cursor, otherwise scrolled just far
    /// enough for the cursor cell to be visible.
    pub fn following(rows: usize, cols: usize, cursor: Option<Cursor>) -> Self {
        let mut viewport = Self::new(rows, cols);
        if let Some(cursor) = cursor {
            viewport.scroll_to_cursor(cursor.row, cursor.col);
        }
        viewport
    }

    pub fn scroll_to_cursor(&mut self, cursor_row: usize, cursor_col: usize) {
        if cursor_row < self.offset_row {
            self.offset_row = cursor_row;
        } else if self.rows > 0 && cursor_row >= self.offset_row + self.rows {
            self.offset_row = cursor_row + 1 - self.rows;
        }
        if cursor_col < self.offset_col {
            self.offset_col = cursor_col;
        } else if self.cols > 0 && cursor_col >= self.offset_col + self.cols {
            self.offset_col = cursor_col + 1 - self.cols;
        }
    }

    /// Move the horizontal offset right until the cells before `cursor_col`, plus one
    /// cell for the cursor itself, fit in `cols` screen columns. `widths` are the display
    /// widths of the code points on the cursor's row.
    pub fn fit_cursor_width(&mut self, widths: &[usize], cursor_col: usize) {
        let end = cursor_col.min(widths.len());
        let mut used: usize = widths
            .get(self.offset_col..end)
            .map_or(0, |w| w.iter().sum());
        while self.offset_col < end && used + 1 > self.cols {
            used -= widths[self.offset_col];
            self.offset_col += 1;
        }
    }

    pub fn screen_row(&self, row: usize) -> Option<usize> {
        let y = row.checked_sub(self.offset_row)?;
        (y < self.rows).then_some(y)
    }

    /// Screen column where code point `col` starts, given the display `widths` of its row.
    pub fn screen_col(&self, widths: &[usize], col: usize) -> Option<usize> {
        let skipped = col.checked_sub(self.offset_col)?;
        let x: usize = widths.iter().skip(self.offset_col).take(skipped).sum();
        (x < self.cols).then_some(x)
    }

    /// Screen position of a buffer position, if it is inside the window.
    pub fn to_screen(&self, row: usize, widths: &[usize], col: usize) -> Option<(usize, usize)> {
        Some((self.screen_col(widths, col)?, self.screen_row(row)?))
    }
}

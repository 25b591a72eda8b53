// ui/render_sync.rs - Pure description of one frame

use ratatui::style::{Color, Style};
use std::io;
use unicode_width::UnicodeWidthChar;

use crate::config::EditorConfig;
use crate::editor::Editor;
use crate::mode::Mode;
use crate::ui::renderer::Screen;
use crate::ui::status_bar::{debug_text, status_text};
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedCell {
    pub col: u16,
    pub row: u16,
    pub ch: char,
    pub style: Style,
}

/// Everything the screen has to do for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// Wipe the terminal before drawing, so glyphs of shrunk rows disappear.
    pub clear: bool,
    pub status: String,
    pub debug: Option<String>,
    pub cells: Vec<PlacedCell>,
    /// `(col, row)` on screen; only set while editing.
    pub cursor: Option<(u16, u16)>,
}

pub fn status_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::White)
}

/// Describe the frame for `editor` on a `(cols, rows)` screen. Never touches the terminal.
pub fn describe(editor: &Editor, config: &EditorConfig, size: (u16, u16)) -> RenderPlan {
    let (cols, rows) = size;
    let show_debug = config.show_debug_line && rows >= 2;
    let reserved = if show_debug { 2 } else { 1 };
    let text_rows = rows.saturating_sub(reserved);

    let mut plan = RenderPlan {
        clear: editor.mode == Mode::Edit,
        status: status_text(editor),
        debug: show_debug.then(|| debug_text(editor)),
        cells: Vec::new(),
        cursor: None,
    };
    if cols == 0 || rows == 0 {
        return plan;
    }

    let mut viewport = Viewport::following(text_rows as usize, cols as usize, editor.cursor);
    let cursor_widths = editor.cursor.map(|cursor| {
        let widths: Vec<usize> = editor
            .buffer
            .row(cursor.row)
            .unwrap_or_default()
            .chars()
            .map(cell_width)
            .collect();
        viewport.fit_cursor_width(&widths, cursor.col);
        widths
    });

    for (row_idx, row) in editor
        .buffer
        .rows()
        .enumerate()
        .skip(viewport.offset_row)
        .take(viewport.rows)
    {
        if let Some(y) = viewport.screen_row(row_idx) {
            let visible: String = row.chars().skip(viewport.offset_col).collect();
            push_text(&mut plan.cells, &visible, y as u16, cols, Style::default());
        }
    }

    if let Some(debug) = &plan.debug {
        push_line(&mut plan.cells, debug, rows - 2, cols, status_style());
    }
    push_line(&mut plan.cells, &plan.status, rows - 1, cols, status_style());

    if let (Some(cursor), Some(widths)) = (editor.cursor, cursor_widths) {
        plan.cursor = viewport
            .to_screen(cursor.row, &widths, cursor.col)
            .map(|(x, y)| (x as u16, y as u16));
    }
    plan
}

/// Screen columns taken by `ch`. Control characters are drawn as a single space.
fn cell_width(ch: char) -> usize {
    if ch.is_control() {
        1
    } else {
        ch.width().unwrap_or(0)
    }
}

/// Place `text` from column 0, each glyph advancing by its display width. Zero-width
/// code points have no cell of their own and are skipped. Returns the next free column.
fn push_text(
    cells: &mut Vec<PlacedCell>,
    text: &str,
    row: u16,
    cols: u16,
    style: Style,
) -> usize {
    let mut x = 0;
    for ch in text.chars() {
        let width = cell_width(ch);
        if width == 0 {
            continue;
        }
        if x + width > cols as usize {
            break;
        }
        cells.push(PlacedCell {
            col: x as u16,
            row,
            ch: if ch.is_control() { ' ' } else { ch },
            style,
        });
        x += width;
    }
    x
}

/// Like `push_text`, padded with spaces so the styled bar spans the whole row.
fn push_line(cells: &mut Vec<PlacedCell>, text: &str, row: u16, cols: u16, style: Style) {
    let used = push_text(cells, text, row, cols, style);
    for x in used..cols as usize {
        cells.push(PlacedCell {
            col: x as u16,
            row,
            ch: ' ',
            style,
        });
    }
}

impl RenderPlan {
    /// Execute the plan on a screen: clear, cells, cursor, flush.
    pub fn apply<S: Screen + ?Sized>(&self, screen: &mut S) -> io::Result<()> {
        if self.clear {
            screen.clear()?;
        }
        for cell in &self.cells {
            screen.draw_cell(cell.col, cell.row, cell.ch, cell.style);
        }
        if let Some((col, row)) = self.cursor {
            screen.set_cursor(col, row);
        }
        screen.flush()
    }
}

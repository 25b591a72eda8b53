// ui/renderer.rs - Screen collaborator and its ratatui implementation

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    style::Style,
};
use std::io::{self, Stdout};

/// Cell-grid renderer the editor draws through. Drawing is staged; nothing reaches the
/// terminal before `flush`.
pub trait Screen {
    /// `(cols, rows)`
    fn size(&self) -> io::Result<(u16, u16)>;
    fn clear(&mut self) -> io::Result<()>;
    fn draw_cell(&mut self, col: u16, row: u16, ch: char, style: Style);
    fn set_cursor(&mut self, col: u16, row: u16);
    fn flush(&mut self) -> io::Result<()>;
}

struct StagedCell {
    col: u16,
    row: u16,
    ch: char,
    style: Style,
}

/// Ratatui-based screen, on the crossterm backend unless told otherwise
pub struct TuiRenderer<B: Backend = CrosstermBackend<Stdout>> {
    terminal: Terminal<B>,
    staged: Vec<StagedCell>,
    cursor: Option<(u16, u16)>,
}

impl TuiRenderer {
    pub fn new() -> io::Result<Self> {
        Self::with_backend(CrosstermBackend::new(io::stdout()))
    }
}

impl<B: Backend> TuiRenderer<B> {
    pub fn with_backend(backend: B) -> io::Result<Self> {
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            staged: Vec::new(),
            cursor: None,
        })
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend> Screen for TuiRenderer<B> {
    fn size(&self) -> io::Result<(u16, u16)> {
        let area = self.terminal.size()?;
        Ok((area.width, area.height))
    }

    fn clear(&mut self) -> io::Result<()> {
        self.terminal.clear()
    }

    fn draw_cell(&mut self, col: u16, row: u16, ch: char, style: Style) {
        self.staged.push(StagedCell {
            col,
            row,
            ch,
            style,
        });
    }

    fn set_cursor(&mut self, col: u16, row: u16) {
        self.cursor = Some((col, row));
    }

    fn flush(&mut self) -> io::Result<()> {
        let Self {
            terminal,
            staged,
            cursor,
        } = self;

        // Frames start blank, so cells not staged this time are erased.
        terminal.draw(|f| {
            let area = f.size();
            let buf = f.buffer_mut();
            for cell in staged.iter() {
                if cell.col < area.width && cell.row < area.height {
                    buf.get_mut(cell.col, cell.row)
                        .set_char(cell.ch)
                        .set_style(cell.style);
                }
            }
            // Without a cursor position ratatui hides the cursor.
            if let Some((col, row)) = *cursor {
                f.set_cursor(col, row);
            }
        })?;

        staged.clear();
        *cursor = None;
        Ok(())
    }
}

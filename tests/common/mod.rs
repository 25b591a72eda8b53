// Shared headless collaborators for driving the editor without a terminal

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::style::Style;
use std::collections::VecDeque;
use std::io;
use tailpad::editor::Editor;
use tailpad::input::InputSource;
use tailpad::ui::Screen;
use unicode_width::UnicodeWidthStr;

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Events for typing `text` character by character.
#[allow(dead_code)]
pub fn typed(text: &str) -> Vec<Event> {
    text.chars().map(|c| key(KeyCode::Char(c))).collect()
}

/// Replays a fixed event list, then fails like a closed terminal would.
#[allow(dead_code)]
pub struct ScriptedInput {
    events: VecDeque<Event>,
}

impl ScriptedInput {
    #[allow(dead_code)]
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    #[allow(dead_code)]
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_input(&mut self) -> io::Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

/// Fixed-size in-memory screen that keeps every flushed frame.
#[allow(dead_code)]
pub struct RecordingScreen {
    cols: u16,
    rows: u16,
    grid: Vec<Vec<char>>,
    cursor: Option<(u16, u16)>,
    pub frames: Vec<Vec<String>>,
    pub cursors: Vec<Option<(u16, u16)>>,
    pub clears: usize,
}

impl RecordingScreen {
    #[allow(dead_code)]
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            grid: vec![vec![' '; cols as usize]; rows as usize],
            cursor: None,
            frames: Vec::new(),
            cursors: Vec::new(),
            clears: 0,
        }
    }

    #[allow(dead_code)]
    pub fn last_frame(&self) -> &[String] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Screen for RecordingScreen {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((self.cols, self.rows))
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn draw_cell(&mut self, col: u16, row: u16, ch: char, _style: Style) {
        if let Some(cell) = self
            .grid
            .get_mut(row as usize)
            .and_then(|line| line.get_mut(col as usize))
        {
            *cell = ch;
        }
    }

    fn set_cursor(&mut self, col: u16, row: u16) {
        self.cursor = Some((col, row));
    }

    fn flush(&mut self) -> io::Result<()> {
        let frame = self
            .grid
            .iter()
            .map(|line| line.iter().collect::<String>().trim_end().to_string())
            .collect();
        self.frames.push(frame);
        self.cursors.push(self.cursor.take());
        // Every frame starts blank, like the real renderer.
        for line in &mut self.grid {
            line.fill(' ');
        }
        Ok(())
    }
}

/// Assert the tail cursor invariant for the current mode.
#[allow(dead_code)]
pub fn assert_cursor_valid(editor: &Editor) {
    match editor.cursor {
        Some(cursor) => {
            let last = editor.buffer.row_count() - 1;
            assert_eq!(cursor.row, last, "cursor must sit on the last row");
            assert_eq!(
                cursor.col,
                editor.buffer.row_len(last),
                "cursor must sit one past the last character"
            );
        }
        None => assert_eq!(editor.mode, tailpad::mode::Mode::View),
    }
}

/// One row as the ratatui test backend holds it, trailing blanks trimmed. The column
/// covered by the right half of a wide glyph is skipped, as a terminal would show it.
#[allow(dead_code)]
pub fn backend_row(backend: &TestBackend, y: u16) -> String {
    let buffer = backend.buffer();
    let mut text = String::new();
    let mut covered = 0;
    for x in 0..buffer.area.width {
        let symbol = buffer.get(x, y).symbol();
        if covered > 0 {
            covered -= 1;
            continue;
        }
        covered = symbol.width().saturating_sub(1);
        text.push_str(symbol);
    }
    text.trim_end().to_string()
}

// src/editor.rs - Editor state and command dispatch

use crossterm::event::Event;
use log::debug;
use std::path::{Path, PathBuf};

use crate::buffer::LineBuffer;
use crate::command::Command;
use crate::cursor::Cursor;
use crate::error::EditorError;
use crate::keymap::key_to_command;
use crate::mode::Mode;
use crate::persistence::{self, Document};

pub struct Editor {
    pub buffer: LineBuffer,
    pub mode: Mode,
    /// Present only in EDIT mode.
    pub cursor: Option<Cursor>,
    pub source: PathBuf,
}

impl Editor {
    pub fn new(source: impl Into<PathBuf>, buffer: LineBuffer) -> Self {
        Self {
            buffer,
            mode: Mode::View,
            cursor: None,
            source: source.into(),
        }
    }

    pub fn from_document(document: Document) -> Self {
        Self::new(document.path, document.buffer)
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Consume one input event. Returns true if the application should stop.
    ///
    /// The cursor is resynced afterwards whether or not the event meant anything.
    pub fn handle_event(&mut self, event: Event) -> Result<bool, EditorError> {
        let should_quit = match event {
            Event::Key(key_event) => match key_to_command(key_event, self.mode) {
                Some(cmd) => self.execute_command(cmd)?,
                None => false,
            },
            _ => false,
        };
        self.sync_cursor();
        Ok(should_quit)
    }

    /// Apply an already resolved command. Returns true if the application should stop.
    /// Leaves the cursor stale; `handle_event` resyncs it.
    pub fn execute_command(&mut self, cmd: Command) -> Result<bool, EditorError> {
        match (self.mode, cmd) {
            (_, Command::Cancel) => self.mode = Mode::View,
            (Mode::View, Command::EnterEdit) => self.mode = Mode::Edit,
            (Mode::View, Command::SaveAndQuit) => {
                persistence::flush(&self.source, &self.buffer)?;
                return Ok(true);
            }
            (Mode::Edit, Command::InsertChar(c)) => {
                self.buffer.append_char(c);
            }
            (Mode::Edit, Command::NewLine) => self.buffer.append_row(),
            (Mode::Edit, Command::DeleteChar) => {
                self.buffer.delete_last_char();
            }
            (mode, cmd) => debug!("ignoring {:?} in {:?} mode", cmd, mode),
        }
        Ok(false)
    }

    /// Recompute the cursor from the buffer. Idempotent.
    pub fn sync_cursor(&mut self) {
        self.cursor = match self.mode {
            Mode::Edit => Some(Cursor::at_tail(&self.buffer)),
            Mode::View => None,
        };
    }
}

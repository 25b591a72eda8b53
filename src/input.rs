// input.rs - Blocking key event source

use crossterm::event::{Event, read};
use std::io;

/// Yields exactly one event per call, blocking until one arrives.
pub trait InputSource {
    fn poll_input(&mut self) -> io::Result<Event>;
}

/// Reads events from the terminal through crossterm.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll_input(&mut self) -> io::Result<Event> {
        read()
    }
}

// lib.rs - Library root for the tailpad editor

pub mod app;
pub mod buffer;
pub mod cli;
pub mod command;
pub mod config;
pub mod cursor;
pub mod editor;
pub mod error;
pub mod input;
pub mod keymap;
pub mod mode;
pub mod persistence;
pub mod terminal;
pub mod ui;
pub mod viewport;

// Edge case scenario tests
// Boundary behavior of the tail-only editing model

mod common;
use common::{assert_cursor_valid, key, typed};

use crossterm::event::KeyCode;
use tailpad::buffer::LineBuffer;
use tailpad::command::Command;
use tailpad::editor::Editor;
use tailpad::mode::Mode;

fn edit(rows: &[&str]) -> Editor {
    let mut editor = Editor::new("unused.txt", LineBuffer::from_lines(rows));
    editor.handle_event(key(KeyCode::Char('e'))).unwrap();
    editor
}

/// Backspace on the only, empty row is a stable no-op
#[test]
fn test_empty_buffer_backspace_is_idempotent() {
    let mut editor = edit(&[""]);
    for _ in 0..5 {
        editor.handle_event(key(KeyCode::Backspace)).unwrap();
        assert_eq!(editor.buffer.serialize(), vec![""]);
        assert_cursor_valid(&editor);
    }
    assert!(!editor.buffer.is_modified());
}

/// Backspace at the start of a non-empty row removes nothing from the row above
#[test]
fn test_backspace_never_joins_rows() {
    let mut editor = edit(&["abc", ""]);
    editor.handle_event(key(KeyCode::Backspace)).unwrap();
    assert_eq!(editor.buffer.serialize(), vec!["abc"]);
    editor.handle_event(key(KeyCode::Backspace)).unwrap();
    assert_eq!(editor.buffer.serialize(), vec!["ab"]);
}

#[test]
fn test_many_empty_rows_collapse_one_at_a_time() {
    let mut editor = edit(&["a"]);
    for _ in 0..4 {
        editor.handle_event(key(KeyCode::Enter)).unwrap();
    }
    assert_eq!(editor.buffer.row_count(), 5);
    for expected in (1..5).rev() {
        editor.handle_event(key(KeyCode::Backspace)).unwrap();
        assert_eq!(editor.buffer.row_count(), expected);
        assert_cursor_valid(&editor);
    }
    assert_eq!(editor.buffer.serialize(), vec!["a"]);
}

#[test]
fn test_sentinel_char_is_swallowed() {
    let mut editor = edit(&["a"]);
    editor.handle_event(key(KeyCode::Char('\0'))).unwrap();
    editor.execute_command(Command::InsertChar('\0')).unwrap();
    assert_eq!(editor.buffer.serialize(), vec!["a"]);
    assert!(!editor.buffer.is_modified());
}

#[test]
fn test_unicode_code_points_count_once() {
    let mut editor = edit(&[""]);
    for event in typed("añ✓🦀") {
        editor.handle_event(event).unwrap();
    }
    assert_eq!(editor.cursor.unwrap().col, 4);
    editor.handle_event(key(KeyCode::Backspace)).unwrap();
    assert_eq!(editor.buffer.serialize(), vec!["añ✓"]);
    assert_eq!(editor.cursor.unwrap().col, 3);
}

#[test]
fn test_reentering_edit_resumes_at_tail() {
    let mut editor = edit(&["one", "two"]);
    editor.handle_event(key(KeyCode::Esc)).unwrap();
    assert_eq!(editor.mode, Mode::View);
    editor.handle_event(key(KeyCode::Char('e'))).unwrap();
    let cursor = editor.cursor.unwrap();
    assert_eq!((cursor.row, cursor.col), (1, 3));
}

#[test]
fn test_escape_in_view_is_harmless() {
    let mut editor = Editor::new("unused.txt", LineBuffer::from_lines(["a"]));
    assert!(!editor.handle_event(key(KeyCode::Esc)).unwrap());
    assert_eq!(editor.mode, Mode::View);
    assert!(editor.cursor.is_none());
}

#[test]
fn test_e_in_edit_mode_is_text() {
    let mut editor = edit(&[""]);
    editor.handle_event(key(KeyCode::Char('e'))).unwrap();
    assert_eq!(editor.buffer.serialize(), vec!["e"]);
    assert_eq!(editor.mode, Mode::Edit);
}

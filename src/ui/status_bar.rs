// ui/status_bar.rs - Status and diagnostic line text

use crate::editor::Editor;

/// `"<MODE>: <source> lines: <rows> <help>"`
pub fn status_text(editor: &Editor) -> String {
    format!(
        "{}: {} lines: {} {}",
        editor.mode.label(),
        editor.source().display(),
        editor.buffer.row_count(),
        editor.mode.help()
    )
}

/// Cursor position and raw rows, for debugging.
pub fn debug_text(editor: &Editor) -> String {
    let (col, row) = match editor.cursor {
        Some(cursor) => (cursor.col.to_string(), cursor.row.to_string()),
        None => ("-".to_string(), "-".to_string()),
    };
    format!(
        "current col: {} current row: {} {:?}",
        col,
        row,
        editor.buffer.serialize()
    )
}

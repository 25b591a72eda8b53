// app.rs - Main loop: describe the screen, wait for one event, dispatch it

use log::info;

use crate::config::EditorConfig;
use crate::editor::Editor;
use crate::error::EditorError;
use crate::input::InputSource;
use crate::ui::render_sync::describe;
use crate::ui::renderer::Screen;

/// Run until the save command succeeds. Any I/O failure ends the loop with an error.
pub fn run<I, S>(
    editor: &mut Editor,
    config: &EditorConfig,
    input: &mut I,
    screen: &mut S,
) -> Result<(), EditorError>
where
    I: InputSource + ?Sized,
    S: Screen + ?Sized,
{
    loop {
        let size = screen.size()?;
        describe(editor, config, size).apply(screen)?;

        let event = input.poll_input()?;
        if editor.handle_event(event)? {
            info!(
                "quit after saving {} (edited: {})",
                editor.source().display(),
                editor.buffer.is_modified()
            );
            return Ok(());
        }
    }
}

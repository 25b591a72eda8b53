// terminal.rs - Raw mode and alternate screen for the lifetime of the editor

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, warn};
use std::io::{self, stdout};
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

/// Set while the terminal is in raw mode on the alternate screen.
static ACTIVE: AtomicBool = AtomicBool::new(false);

/// RAII guard: entering switches the terminal to raw mode on the alternate screen,
/// dropping restores it on every exit path, including error returns and panics.
pub struct TerminalSession {
    _entered: (),
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        ACTIVE.store(true, Ordering::SeqCst);
        Ok(Self { _entered: () })
    }

    pub fn leave(&mut self) -> io::Result<()> {
        restore()
    }

    pub fn is_active() -> bool {
        ACTIVE.load(Ordering::SeqCst)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.leave() {
            warn!("failed to restore terminal: {}", e);
        }
    }
}

/// Leave the alternate screen and raw mode, once.
fn restore() -> io::Result<()> {
    if ACTIVE.swap(false, Ordering::SeqCst) {
        execute!(stdout(), LeaveAlternateScreen, Show)?;
        disable_raw_mode()?;
    }
    Ok(())
}

/// Chain a hook in front of the default one that gives the terminal back and logs the
/// panic. The default hook prints to stderr, which is unreadable on the alternate screen.
pub fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if let Err(e) = restore() {
                error!("failed to restore terminal after panic: {}", e);
            }
            error!("panic: {}", info);
            default_panic(info);
        }));
    });
}

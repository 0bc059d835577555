//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use launches_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enter the alternate screen with mouse reporting on
pub fn init() -> Result<ratatui::DefaultTerminal> {
    let terminal = ratatui::try_init()
        .map_err(|e| Error::TerminalInit(format!("failed to initialize terminal: {e}")))?;
    execute!(stdout(), EnableMouseCapture)
        .map_err(|e| Error::TerminalInit(format!("failed to enable mouse capture: {e}")))?;
    Ok(terminal)
}

/// Leave the alternate screen and turn mouse reporting off
pub fn restore() {
    if let Err(e) = execute!(stdout(), DisableMouseCapture) {
        warn!("Failed to disable mouse capture: {}", e);
    }
    ratatui::restore();
}

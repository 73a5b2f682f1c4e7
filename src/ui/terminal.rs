//! Terminal setup and teardown for the interactive binary.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

use crate::error::{ErdPickerResult, UiError};

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

fn init_error(step: &str, error: io::Error) -> UiError {
    UiError::TerminalInitError(format!("{step}: {error}"))
}

/// Switch to raw mode and the alternate screen with mouse capture.
///
/// Raw mode is turned back off if a later step fails.
pub fn init_terminal() -> ErdPickerResult<CrosstermTerminal> {
    enable_raw_mode().map_err(|e| init_error("enable raw mode", e))?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(init_error("enter alternate screen", e).into());
    }

    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        init_error("create terminal", e).into()
    })
}

/// Undo [`init_terminal`].
pub fn restore_terminal(terminal: &mut CrosstermTerminal) -> ErdPickerResult<()> {
    disable_raw_mode().map_err(UiError::from)?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .map_err(UiError::from)?;
    terminal.show_cursor().map_err(UiError::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErdPickerError;

    /// # Terminal Init Error
    ///
    /// Tests that a failed setup step is reported as a UI error.
    ///
    /// ## Test Scenario
    /// - Wraps an I/O error from the raw mode step
    ///
    /// ## Expected Outcome
    /// - The error is `ErdPickerError::Ui(TerminalInitError)`
    /// - The message names the step and the cause
    #[test]
    fn test_init_error_names_failed_step() {
        let err: ErdPickerError =
            init_error("enable raw mode", io::Error::other("not a tty")).into();

        assert!(matches!(
            err,
            ErdPickerError::Ui(UiError::TerminalInitError(_))
        ));
        assert_eq!(
            err.to_string(),
            "UI error: Failed to initialize terminal: enable raw mode: not a tty"
        );
    }
}

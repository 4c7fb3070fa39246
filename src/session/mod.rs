//! Input session: turns keypad commands into buffer edits and evaluations.

mod command;
mod state;

pub use command::{BACKSPACE, Command, CommandError};
pub use state::{ERROR_TEXT, PLACEHOLDER, SessionState};

/// A calculator session owning one buffer and its display flags.
///
/// Sessions share nothing, so several calculators can run side by side.
#[derive(Clone, Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current display text.
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Apply a parsed command and return the new display text.
    pub fn press(&mut self, command: Command) -> &str {
        self.state = std::mem::take(&mut self.state).apply(command);
        tracing::debug!(
            %command,
            buffer = self.state.buffer(),
            result_shown = self.state.result_shown(),
            at_default_zero = self.state.at_default_zero(),
            "handled command"
        );
        self.state.display()
    }

    /// Parse a command symbol, apply it, and return the new display text.
    ///
    /// An unrecognised symbol leaves the session untouched.
    pub fn handle(&mut self, command: &str) -> Result<&str, CommandError> {
        let command: Command = command.parse()?;
        Ok(self.press(command))
    }
}

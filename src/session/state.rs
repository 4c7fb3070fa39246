//! The input session state machine.
//!
//! [`SessionState`] is a plain value. Every command is a pure transition
//! from one state to the next, so the whole machine can be driven and
//! inspected without any front-end attached.

use super::command::Command;
use crate::calculator::{EvalError, evaluate, format_result, is_operator};

/// Text shown after a failed evaluation.
pub const ERROR_TEXT: &str = "Error";

/// Text shown while the buffer is empty.
pub const PLACEHOLDER: &str = "0";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    buffer: String,
    /// Set right after a successful `=`.
    result_shown: bool,
    /// Set while the display is the placeholder "0".
    at_default_zero: bool,
    /// Failure from the `=` that produced this state, if any.
    last_error: Option<EvalError>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            result_shown: false,
            at_default_zero: true,
            last_error: None,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn result_shown(&self) -> bool {
        self.result_shown
    }

    pub fn at_default_zero(&self) -> bool {
        self.at_default_zero
    }

    pub fn last_error(&self) -> Option<&EvalError> {
        self.last_error.as_ref()
    }

    /// The text a front-end should render for this state.
    pub fn display(&self) -> &str {
        if self.last_error.is_some() {
            ERROR_TEXT
        } else if self.buffer.is_empty() {
            PLACEHOLDER
        } else {
            &self.buffer
        }
    }

    /// Transition to the state that follows `command`.
    pub fn apply(mut self, command: Command) -> Self {
        self.last_error = None;

        match command {
            Command::Evaluate => self.evaluate(),
            Command::Clear => Self::new(),
            Command::Backspace => {
                self.result_shown = false;
                self.buffer.pop();
                self.at_default_zero = self.buffer.is_empty();
                self
            }
            Command::Operator(op) if self.result_shown => {
                self.result_shown = false;
                self.buffer.push(op.as_char());
                self
            }
            Command::Digit(d) if self.result_shown => {
                self.result_shown = false;
                self.at_default_zero = false;
                self.buffer.clear();
                self.buffer.push(d);
                self
            }
            Command::Point if self.result_shown => {
                self.result_shown = false;
                self.at_default_zero = false;
                self.buffer = "0.".to_string();
                self
            }
            other => {
                self.result_shown = false;
                self.enter(other)
            }
        }
    }

    /// Fresh-entry rules for digits, the point, operators and brackets.
    fn enter(mut self, command: Command) -> Self {
        let Some(symbol) = command.symbol() else {
            return self;
        };

        // Brackets are appended without leaving the placeholder state.
        if self.at_default_zero {
            match command {
                Command::Point => {
                    self.at_default_zero = false;
                    self.buffer = "0.".to_string();
                    return self;
                }
                Command::Digit(_) => {
                    self.at_default_zero = false;
                    self.buffer.clear();
                }
                Command::Operator(_) => {
                    self.at_default_zero = false;
                    self.buffer.push('0');
                }
                _ => {}
            }
        }

        self.buffer.push(symbol);
        self
    }

    fn evaluate(mut self) -> Self {
        if self.buffer.is_empty() {
            return self;
        }

        let expression = normalize(&self.buffer);
        match evaluate(&expression) {
            Ok(value) => {
                let text = format_result(value);
                tracing::debug!(%expression, result = %text, "evaluated");
                self.buffer = text;
                self.result_shown = true;
                self.at_default_zero = false;
            }
            Err(err) => {
                tracing::warn!(%expression, error = %err, "evaluation failed");
                self.buffer.clear();
                self.result_shown = false;
                self.last_error = Some(err);
            }
        }
        self
    }
}

/// Supply implicit zero operands around a dangling leading or trailing operator.
fn normalize(buffer: &str) -> String {
    let mut expression = buffer.to_string();
    if expression.ends_with(is_operator) {
        expression.push('0');
    }
    if expression.starts_with(is_operator) {
        expression.insert(0, '0');
    }
    expression
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: SessionState, keys: &str) -> SessionState {
        keys.chars().fold(state, |state, c| {
            state.apply(Command::from_char(c).expect("test keys are valid"))
        })
    }

    #[test]
    fn test_initial_state() {
        let state = SessionState::new();
        assert_eq!(state.display(), "0");
        assert!(state.at_default_zero());
        assert!(!state.result_shown());
        assert_eq!(state.buffer(), "");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("5+"), "5+0");
        assert_eq!(normalize("-5"), "0-5");
        assert_eq!(normalize("*5"), "0*5");
        assert_eq!(normalize("-"), "0-0");
        assert_eq!(normalize("(1+2)"), "(1+2)");
    }

    #[test]
    fn test_digit_replaces_placeholder() {
        let state = run(SessionState::new(), "7");
        assert_eq!(state.display(), "7");
        assert!(!state.at_default_zero());
    }

    #[test]
    fn test_point_on_placeholder() {
        let state = run(SessionState::new(), ".");
        assert_eq!(state.buffer(), "0.");
        let state = run(state, "5=");
        assert_eq!(state.display(), "0.5");
    }

    #[test]
    fn test_operator_on_placeholder_synthesizes_zero() {
        let state = run(SessionState::new(), "+");
        assert_eq!(state.display(), "0+");
        let state = run(state, "5=");
        assert_eq!(state.display(), "5");
    }

    #[test]
    fn test_bracket_keeps_placeholder_state() {
        let state = run(SessionState::new(), "(");
        assert_eq!(state.display(), "(");
        assert!(state.at_default_zero());

        let state = run(state, "5");
        assert_eq!(state.display(), "5");
        assert!(!state.at_default_zero());
    }

    #[test]
    fn test_bracket_after_entry_is_appended() {
        let state = run(SessionState::new(), "2*(5+1)=");
        assert_eq!(state.display(), "12");
    }

    #[test]
    fn test_trailing_operator_gets_zero_operand() {
        let state = run(SessionState::new(), "5*=");
        assert_eq!(state.display(), "0");
        let state = run(SessionState::new(), "5+=");
        assert_eq!(state.display(), "5");
    }

    #[test]
    fn test_operator_continues_from_result() {
        let state = run(SessionState::new(), "5+3=");
        assert_eq!(state.display(), "8");
        assert!(state.result_shown());

        let state = run(state, "*");
        assert_eq!(state.display(), "8*");
        assert!(!state.result_shown());

        let state = run(state, "2=");
        assert_eq!(state.display(), "16");
    }

    #[test]
    fn test_digit_after_result_starts_fresh() {
        let state = run(SessionState::new(), "5+3=4");
        assert_eq!(state.display(), "4");
        let state = run(SessionState::new(), "5+3=.");
        assert_eq!(state.display(), "0.");
    }

    #[test]
    fn test_negative_result_chains() {
        let state = run(SessionState::new(), "3-5=");
        assert_eq!(state.display(), "-2");
        let state = run(state, "*3=");
        assert_eq!(state.display(), "-6");
    }

    #[test]
    fn test_evaluate_on_empty_buffer() {
        let state = run(SessionState::new(), "=");
        assert_eq!(state.display(), "0");
        assert_eq!(state, SessionState::new());
    }

    #[test]
    fn test_repeated_evaluate_is_stable() {
        let state = run(SessionState::new(), "1/3=");
        assert_eq!(state.display(), "0.333333333");
        let again = run(state.clone(), "=");
        assert_eq!(again.display(), state.display());
        let again = run(again, "=");
        assert_eq!(again.display(), "0.333333333");
    }

    #[test]
    fn test_error_clears_buffer() {
        let state = run(SessionState::new(), "5/0=");
        assert_eq!(state.display(), "Error");
        assert_eq!(state.buffer(), "");
        assert_eq!(state.last_error(), Some(&EvalError::DivisionByZero));

        let state = run(state, "4=");
        assert_eq!(state.display(), "4");
        assert_eq!(state.last_error(), None);
    }

    #[test]
    fn test_malformed_input_shows_error() {
        let state = run(SessionState::new(), "5*(2+3=");
        assert_eq!(state.display(), "Error");
        assert!(matches!(
            state.last_error(),
            Some(EvalError::MalformedExpression(_))
        ));

        let state = run(SessionState::new(), "1..2=");
        assert_eq!(state.display(), "Error");
    }

    #[test]
    fn test_error_keeps_default_zero_flag() {
        let state = run(SessionState::new(), "5/0=");
        assert!(!state.at_default_zero());

        let state = run(state, "-");
        assert_eq!(state.display(), "-");
        let state = run(state, "3");
        assert_eq!(state.display(), "-3");
        let state = run(state, "=");
        assert_eq!(state.display(), "-3");
    }

    #[test]
    fn test_backspace() {
        let state = run(SessionState::new(), "78");
        let state = state.apply(Command::Backspace);
        assert_eq!(state.display(), "7");
        assert!(!state.at_default_zero());

        let state = state.apply(Command::Backspace);
        assert_eq!(state.display(), "0");
        assert!(state.at_default_zero());

        let state = state.apply(Command::Backspace);
        assert_eq!(state.display(), "0");
        assert!(state.at_default_zero());
    }

    #[test]
    fn test_backspace_edits_result() {
        let state = run(SessionState::new(), "12*2=");
        assert_eq!(state.display(), "24");
        let state = state.apply(Command::Backspace);
        assert_eq!(state.display(), "2");
        assert!(!state.result_shown());
        let state = run(state, "5");
        assert_eq!(state.display(), "25");
    }

    #[test]
    fn test_clear_resets_everything() {
        let state = run(SessionState::new(), "5+3=");
        let state = state.apply(Command::Clear);
        assert_eq!(state, SessionState::new());
        assert_eq!(state.display(), "0");

        let state = run(state, "+5=");
        assert_eq!(state.display(), "5");
    }

    #[test]
    fn test_leading_operator_gets_zero_operand() {
        let state = run(SessionState::new(), "3-5=");
        assert_eq!(state.display(), "-2");

        let state = state.apply(Command::Backspace);
        assert_eq!(state.display(), "-");
        let state = run(state, "=");
        assert_eq!(state.display(), "0");

        let state = run(SessionState::new(), "3-5=");
        let state = state.apply(Command::Backspace);
        let state = run(state, "4=");
        assert_eq!(state.display(), "-4");
    }
}

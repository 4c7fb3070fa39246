//! A keypad-driven arithmetic calculator.
//!
//! [`calculator::evaluate`] reduces an expression string to a number.
//! [`session::Session`] accumulates keypad commands into an expression and
//! evaluates it when `=` arrives. The remaining modules are a thin terminal
//! front-end over those two.

pub mod calculator;
pub mod config;
pub mod keypad;
pub mod keys;
pub mod session;
pub mod terminal;

pub use calculator::{EvalError, evaluate, format_result};
pub use session::{Command, CommandError, Session, SessionState};

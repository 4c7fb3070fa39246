//! Calculator module for evaluating arithmetic expressions.
//!
//! This module provides functionality to:
//! - Scan expressions into tokens
//! - Evaluate expressions with operator precedence and brackets
//! - Format results for display
//! - Copy results to the clipboard

mod clipboard;
mod evaluation;
mod token;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use evaluation::{EvalError, evaluate, format_result};
pub use token::{Lexer, Operator, Token, is_operator};

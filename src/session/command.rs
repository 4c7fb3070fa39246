//! Discrete input commands accepted by a session.

use crate::calculator::Operator;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical backspace symbol, as printed on the keypad.
pub const BACKSPACE: &str = "←";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unrecognised command '{0}'")]
pub struct CommandError(pub String);

/// A single keypad command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// One of `0`..=`9`.
    Digit(char),
    Point,
    Operator(Operator),
    OpenBracket,
    CloseBracket,
    Evaluate,
    Clear,
    Backspace,
}

impl Command {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c)),
            '.' => Some(Self::Point),
            '(' => Some(Self::OpenBracket),
            ')' => Some(Self::CloseBracket),
            '=' => Some(Self::Evaluate),
            'C' => Some(Self::Clear),
            // ASCII BS and DEL, as sent by terminals.
            '←' | '\u{8}' | '\u{7f}' => Some(Self::Backspace),
            c => Operator::from_char(c).map(Self::Operator),
        }
    }

    /// The character appended to the buffer when this command is entered
    /// verbatim. Control commands have none.
    pub fn symbol(self) -> Option<char> {
        match self {
            Self::Digit(d) => Some(d),
            Self::Point => Some('.'),
            Self::Operator(op) => Some(op.as_char()),
            Self::OpenBracket => Some('('),
            Self::CloseBracket => Some(')'),
            Self::Evaluate | Self::Clear | Self::Backspace => None,
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| CommandError(s.to_string())),
            _ => Err(CommandError(s.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Evaluate => write!(f, "="),
            Self::Clear => write!(f, "C"),
            Self::Backspace => write!(f, "{}", BACKSPACE),
            other => match other.symbol() {
                Some(c) => write!(f, "{}", c),
                None => Ok(()),
            },
        }
    }
}

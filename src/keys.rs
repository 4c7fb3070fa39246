//! Key script parsing for text front-ends.
//!
//! A key script is a line of typed keys such as `12 + 3 = bs`. It is split
//! into keypad commands so that terminal input drives the session exactly
//! like button presses would.

use crate::calculator::Operator;
use crate::session::{Command, CommandError};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One key per match: a spelled-out backspace, or any single
    /// non-whitespace character.
    static ref KEY: Regex = Regex::new(r"(?i:backspace|bs)|\S").unwrap();

    /// Lines that only contain characters a key script may use.
    static ref KEY_SCRIPT_CHARS: Regex = Regex::new(
        r"^(?i:backspace|bs|[\d\s\.\+\-\*/()=c<←x×÷])+$"
    ).unwrap();
}

/// Map one key spelling to a command.
pub fn parse_key(key: &str) -> Result<Command, CommandError> {
    match key {
        "<" => Ok(Command::Backspace),
        "c" => Ok(Command::Clear),
        "x" | "X" | "×" => Ok(Command::Operator(Operator::Multiply)),
        "÷" => Ok(Command::Operator(Operator::Divide)),
        k if k.eq_ignore_ascii_case("bs") || k.eq_ignore_ascii_case("backspace") => {
            Ok(Command::Backspace)
        }
        k => k.parse(),
    }
}

/// Split a key script into commands. Whitespace between keys is ignored.
pub fn parse_keys(script: &str) -> Result<Vec<Command>, CommandError> {
    KEY.find_iter(script)
        .map(|m| parse_key(m.as_str()))
        .collect()
}

/// Quick check that a line could be a key script, before parsing it.
pub fn looks_like_key_script(input: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty() && KEY_SCRIPT_CHARS.is_match(trimmed)
}

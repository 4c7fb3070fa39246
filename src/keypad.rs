//! The calculator keypad layout.

use crate::session::BACKSPACE;

pub const ROWS: usize = 5;
pub const COLUMNS: usize = 4;

/// Button labels, row by row. Each label is a valid command symbol.
pub const KEYPAD: [[&str; COLUMNS]; ROWS] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    [".", "0", "=", "+"],
    ["(", ")", "C", BACKSPACE],
];

/// Render the keypad as a text grid.
pub fn render_keypad() -> String {
    let mut out = String::new();
    for row in KEYPAD {
        let line: Vec<String> = row.iter().map(|label| format!("[ {} ]", label)).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

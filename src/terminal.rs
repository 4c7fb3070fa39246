//! Line-oriented terminal front-end.
//!
//! Each input line is a key script fed to one long-lived [`Session`]. The
//! front-end only forwards commands and prints whatever the session reports
//! as display text.

use crate::calculator::copy_to_clipboard;
use crate::config::Config;
use crate::keypad::render_keypad;
use crate::keys::{looks_like_key_script, parse_keys};
use crate::session::{CommandError, Session};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Options for one terminal run.
#[derive(Clone, Debug)]
pub struct TerminalOptions {
    pub prompt: String,
    pub show_keypad: bool,
    pub copy_on_evaluate: bool,
    /// Print the display after every key instead of once per line.
    pub trace: bool,
}

impl TerminalOptions {
    pub fn from_config(config: &Config, trace: bool) -> Self {
        Self {
            prompt: config.prompt.clone(),
            show_keypad: config.show_keypad,
            copy_on_evaluate: config.copy_on_evaluate,
            trace,
        }
    }
}

/// What the caller should do after a meta line.
enum Flow {
    Continue,
    Quit,
}

/// Feed a key script into `session`, returning the displays it produced.
///
/// With `trace` every intermediate display is returned, otherwise only the
/// final one. A bad key aborts the script before any command is applied.
pub fn run_script(
    session: &mut Session,
    script: &str,
    trace: bool,
) -> Result<Vec<String>, CommandError> {
    let commands = parse_keys(script)?;
    let mut displays = Vec::new();

    for command in commands {
        let display = session.press(command);
        if trace {
            displays.push(display.to_string());
        }
    }

    if !trace {
        displays.push(session.display().to_string());
    }
    Ok(displays)
}

fn copy_display(session: &Session, out: &mut impl Write) -> Result<()> {
    match copy_to_clipboard(session.display()) {
        Ok(()) => writeln!(out, "copied {}", session.display())?,
        Err(err) => {
            tracing::warn!(error = %err, "clipboard copy failed");
            writeln!(out, "{}", err)?;
        }
    }
    Ok(())
}

fn handle_meta(line: &str, session: &Session, out: &mut impl Write) -> Result<Flow> {
    match line {
        ":quit" | ":q" => return Ok(Flow::Quit),
        ":copy" => copy_display(session, out)?,
        ":keypad" => write!(out, "{}", render_keypad())?,
        other => writeln!(out, "unknown meta command '{}'", other)?,
    }
    Ok(Flow::Continue)
}

/// Run the interactive loop until end of input or `:quit`.
pub fn run_interactive(
    input: impl BufRead,
    mut out: impl Write,
    options: &TerminalOptions,
) -> Result<()> {
    let mut session = Session::new();
    tracing::info!("starting interactive session");

    if options.show_keypad {
        write!(out, "{}", render_keypad())?;
    }
    writeln!(out, "{}", session.display())?;

    write!(out, "{}", options.prompt)?;
    out.flush()?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let line = line.trim();

        if line.starts_with(':') {
            if let Flow::Quit = handle_meta(line, &session, &mut out)? {
                break;
            }
        } else if line.is_empty() {
            // Nothing to do; just prompt again.
        } else if !looks_like_key_script(line) {
            tracing::debug!(line, "rejected non key script line");
            writeln!(out, "not a key script: '{}'", line)?;
        } else {
            match run_script(&mut session, line, options.trace) {
                Ok(displays) => {
                    for display in displays {
                        writeln!(out, "{}", display)?;
                    }
                    // Any key after a successful `=` clears result_shown.
                    if options.copy_on_evaluate && session.state().result_shown() {
                        copy_display(&session, &mut out)?;
                    }
                }
                Err(err) => writeln!(out, "{}", err)?,
            }
        }

        write!(out, "{}", options.prompt)?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

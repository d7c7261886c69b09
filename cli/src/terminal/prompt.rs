//! Interactive input.
//!
//! Prompts are read through [`console::Term`]; malformed ids surface as a
//! [`PromptError`] here and are reported at the prompt, so the registry
//! only ever receives well-formed integers.

use colored::*;
use console::Term;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use cursus_common::error;
use cursus_common::error::PromptError;

use crate::cprint;
use crate::terminal::{colors, print};

pub fn line(term: &Term, label: &str) -> Result<String, PromptError> {
    term.write_str(&format!("{} ", label.color(colors::PRIMARY)))?;
    Ok(term.read_line()?.trim().to_string())
}

pub fn number(term: &Term, label: &str) -> Result<u32, PromptError> {
    let raw = line(term, label)?;
    raw.parse::<u32>().map_err(|_| PromptError::NotANumber(raw))
}

/// Reads an id, reporting a malformed entry instead of bubbling it up.
pub fn id_or_report(term: &Term, label: &str) -> Option<u32> {
    match number(term, label) {
        Ok(id) => Some(id),
        Err(err) => {
            error!("{err}");
            None
        }
    }
}

/// Reads a free-form string, reporting a terminal failure as `None`.
pub fn text_or_report(term: &Term, label: &str) -> Option<String> {
    match line(term, label) {
        Ok(text) => Some(text),
        Err(err) => {
            error!("{err}");
            None
        }
    }
}

/// Blocks until any key is pressed.
///
/// Falls back to an immediate return when the terminal cannot enter raw
/// mode (e.g. output is piped).
pub fn pause() {
    cprint!();
    print::status("Press any key to continue...");

    if terminal::enable_raw_mode().is_err() {
        return;
    }
    loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break,
            Ok(_) => continue,
            Err(_) => break,
        }
    }
    let _ = terminal::disable_raw_mode();
}

//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use crossterm::style::{Stylize, style};

use super::quiet;
use crate::pass::{GenerateError, MAX_LENGTH, MIN_LENGTH};

/// Yellow warning on stderr, suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", style(msg).yellow());
    }
}

/// Red error on stderr, always shown
pub fn error(msg: &str) {
    eprintln!("{}", style(msg).red());
}

pub fn generation_failed(err: &GenerateError) {
    error(&format!("Error: {err}"));
    if let GenerateError::InvalidPolicy(_) = err {
        eprintln!(
            "Enable at least one character class and use a length of {MIN_LENGTH}-{MAX_LENGTH}."
        );
    }
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** -{count} COPIED TO CLIPBOARD- ***");
    }
}

/// Always shown
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Ask whether to print instead when no clipboard is available.
/// Quiet or non-interactive runs fall back without asking.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn settings_saved() {
    if !quiet::enabled() {
        eprintln!("Defaults saved.");
    }
}

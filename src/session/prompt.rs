//! User prompts
//!
//! This module contains the questions the engine asks the user while saving
//! or deleting presets, with a terminal implementation and a pre-answered one.

use std::io::{self, BufRead, Write};

use log::{debug, error};

/// Questions the engine may ask the user
pub trait Prompter {
    /// Asks for a preset name, offering `default`; `None` cancels
    fn ask_preset_name(&mut self, default: Option<&str>) -> Option<String>;

    /// Asks a yes/no question
    fn confirm(&mut self, title: &str, message: &str) -> bool;

    /// Shows a blocking error notification
    fn notify_error(&mut self, title: &str, message: &str);
}

/// Prompts on the terminal
///
/// Confirmations answer "no" without asking when stdin is not a terminal.
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl StdinPrompter {
    fn read_line() -> Option<String> {
        let mut input = String::new();
        io::stdout().flush().ok()?;
        match io::stdin().lock().read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                debug!("Failed to read from stdin: {e}");
                None
            }
        }
    }
}

impl Prompter for StdinPrompter {
    fn ask_preset_name(&mut self, default: Option<&str>) -> Option<String> {
        match default {
            Some(name) => print!("Preset name [{name}]: "),
            None => print!("Preset name: "),
        }
        let answer = Self::read_line()?;
        if answer.trim().is_empty() {
            default.map(str::to_string).or(Some(answer))
        } else {
            Some(answer.trim().to_string())
        }
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        if !atty::is(atty::Stream::Stdin) {
            debug!("{title}: stdin is not a terminal, answering no");
            return false;
        }
        println!("{title}");
        print!("{message} (y/n) ");
        let answer = Self::read_line().unwrap_or_default().trim().to_lowercase();
        answer == "y" || answer == "yes"
    }

    fn notify_error(&mut self, title: &str, message: &str) {
        error!("{title}: {message}");
    }
}

/// Pre-answered prompter
///
/// The name is handed out once; later requests cancel. Errors are collected.
#[derive(Debug, Clone, Default)]
pub struct FixedPrompter {
    name: Option<String>,
    answer: bool,
    pub errors: Vec<String>,
}

impl FixedPrompter {
    pub fn new(name: Option<&str>, answer: bool) -> Self {
        FixedPrompter {
            name: name.map(str::to_string),
            answer,
            errors: Vec::new(),
        }
    }
}

impl Prompter for FixedPrompter {
    fn ask_preset_name(&mut self, _default: Option<&str>) -> Option<String> {
        self.name.take()
    }

    fn confirm(&mut self, title: &str, _message: &str) -> bool {
        debug!("{title}: answering {}", if self.answer { "yes" } else { "no" });
        self.answer
    }

    fn notify_error(&mut self, title: &str, message: &str) {
        error!("{title}: {message}");
        self.errors.push(message.to_string());
    }
}

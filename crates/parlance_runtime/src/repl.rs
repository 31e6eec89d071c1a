//! A small interactive loop for trying extractions out.

use chrono::Local;
use parlance_foundation::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::driver::TextOrValue;
use crate::registry::Parser;

/// The interactive extraction loop.
///
/// Reads one utterance per line and prints the numbers, the first duration
/// and the first date/time found in it.
pub struct Repl {
    parser: Parser,
    prompt: String,
}

impl Repl {
    /// Creates a REPL for the given locale.
    ///
    /// # Errors
    ///
    /// Fails when the locale is unsupported or its configuration is broken.
    pub fn new(locale: &str) -> Result<Self> {
        Ok(Self {
            parser: Parser::for_locale(locale)?,
            prompt: format!("{locale}> "),
        })
    }

    /// Runs the loop until end of input or interrupt.
    ///
    /// # Errors
    ///
    /// Returns an error message when the line editor cannot be initialized.
    pub fn run(&self) -> std::result::Result<(), String> {
        let mut editor = DefaultEditor::new().map_err(|e| e.to_string())?;

        loop {
            match editor.readline(&self.prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let _ = editor.add_history_entry(&line);
                    self.print_extractions(&line);
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
                Err(e) => return Err(e.to_string()),
            }
        }
    }

    fn print_extractions(&self, line: &str) {
        let numbers = self.parser.extract_number(line).mixed_with_text();
        if numbers.iter().any(|part| part.value().is_some()) {
            print!("numbers:");
            for part in &numbers {
                match part {
                    TextOrValue::Text(_) => {}
                    TextOrValue::Value(n) => print!(" {n}"),
                }
            }
            println!();
        }

        if let Some(duration) = self.parser.extract_duration(line).first() {
            println!(
                "duration: {}ns + {}d + {}mo + {}y",
                duration.nanos, duration.days, duration.months, duration.years
            );
        }

        let now = Local::now().naive_local();
        if let Some(date_time) = self.parser.extract_date_time(line, now).first() {
            println!("date/time: {date_time}");
        }
    }
}

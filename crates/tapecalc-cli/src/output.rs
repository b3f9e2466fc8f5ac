//! Output formatting

use crate::error::CliResult;
use crate::runner::Transcript;
use console::{style, Term};
use serde::{Deserialize, Serialize};
use tapecalc::keypad::{ButtonKind, Keypad};

/// Output format for transcripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// One display line per press
    #[default]
    Text,
    /// The whole transcript as JSON
    Json,
}

/// Writes displays, tapes and keypads to the terminal
#[derive(Debug)]
pub struct Reporter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Reporter {
    /// Create a reporter writing to stdout
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        console::set_colors_enabled(use_color);
        Self {
            term: Term::stdout(),
            use_color,
            quiet,
        }
    }

    /// Print one display value; the error sentinel is highlighted
    pub fn display(&self, text: &str, is_error: bool) -> CliResult<()> {
        let line = if is_error && self.use_color {
            style(text).red().bold().to_string()
        } else if self.use_color {
            style(text).bold().to_string()
        } else {
            text.to_string()
        };
        self.term.write_line(&line)?;
        Ok(())
    }

    /// Print a transcript in the requested format
    pub fn transcript(
        &self,
        transcript: &Transcript,
        format: OutputFormat,
        final_only: bool,
        show_tape: bool,
    ) -> CliResult<()> {
        match format {
            OutputFormat::Json => {
                self.term
                    .write_line(&serde_json::to_string_pretty(transcript)?)?;
            }
            OutputFormat::Text => {
                if final_only {
                    self.display(&transcript.display, transcript.is_error())?;
                } else {
                    for press in &transcript.presses {
                        self.display(&press.display, press.is_error())?;
                    }
                }
                if show_tape {
                    self.tape(&transcript.tape)?;
                }
            }
        }
        Ok(())
    }

    /// Print tape lines under a rule
    pub fn tape(&self, lines: &[String]) -> CliResult<()> {
        if self.quiet {
            return Ok(());
        }
        let rule = "-".repeat(24);
        self.term.write_line(&rule)?;
        for line in lines {
            self.term.write_line(line)?;
        }
        Ok(())
    }

    /// Print the keypad grid, accent keys coloured
    pub fn keypad(&self, keypad: &Keypad, with_ids: bool) -> CliResult<()> {
        let (rows, cols) = keypad.dimensions();
        for row in 0..rows {
            let cells: Vec<String> = (0..cols)
                .map(|col| match keypad.get_button_at(row, col) {
                    Some(btn) => {
                        let text = if with_ids {
                            format!("[ {} {:<11} ]", btn.label(), btn.id)
                        } else {
                            format!("[ {} ]", btn.label())
                        };
                        self.paint_key(&text, btn.kind())
                    }
                    None if with_ids => format!("[ {:<13} ]", ""),
                    None => "[   ]".to_string(),
                })
                .collect();
            self.term.write_line(&cells.join(" "))?;
        }
        Ok(())
    }

    fn paint_key(&self, text: &str, kind: ButtonKind) -> String {
        if !self.use_color {
            return text.to_string();
        }
        match kind {
            _ if kind.is_accent() => style(text).yellow().bold().to_string(),
            ButtonKind::Clear => style(text).black().on_white().to_string(),
            _ => style(text).white().to_string(),
        }
    }

    /// Print a warning to stderr
    pub fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        let prefix = if self.use_color {
            style("⚠").yellow().bold().to_string()
        } else {
            "WARN".to_string()
        };
        let _ = Term::stderr().write_line(&format!("{prefix} {message}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_format_serialize() {
        let json = serde_json::to_string(&OutputFormat::Json).unwrap();
        assert_eq!(json, "\"Json\"");
    }

    #[test]
    fn test_reporter_default_is_plain() {
        let reporter = Reporter::default();
        assert!(!reporter.use_color);
        assert!(!reporter.quiet);
    }

    #[test]
    fn test_paint_key_plain_without_color() {
        let reporter = Reporter::new(false, false);
        assert_eq!(reporter.paint_key("[ + ]", ButtonKind::Operator), "[ + ]");
    }
}

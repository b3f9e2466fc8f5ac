//! Feeds keypad labels into a calculator and records what was shown

use crate::error::{CliError, CliResult};
use serde::Serialize;
use tapecalc::calculator::Calculator;
use tapecalc::core::{Token, ERROR_DISPLAY};
use tracing::info;

/// One button press and the display it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Press {
    /// The label as given
    pub label: String,
    /// The rendered display after the press
    pub display: String,
}

impl Press {
    /// True if the press produced the division-by-zero sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }
}

/// Everything a run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    /// Every press in order
    pub presses: Vec<Press>,
    /// The display after the last press
    pub display: String,
    /// Tape lines, oldest first
    pub tape: Vec<String>,
}

impl Transcript {
    /// True if the final display is the error sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }
}

/// Splits arguments or a typed line into single-key labels.
///
/// Every non-whitespace character is one key, so `5+3=` and `5 + 3 =` are the
/// same input.
#[must_use]
pub fn split_labels<S: AsRef<str>>(inputs: &[S]) -> Vec<String> {
    inputs
        .iter()
        .flat_map(|s| {
            s.as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(String::from)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// A calculator session that keeps its transcript
#[derive(Debug)]
pub struct Session {
    calc: Calculator,
    presses: Vec<Press>,
}

impl Session {
    /// Creates a session whose tape holds at most `tape_capacity` lines
    #[must_use]
    pub fn new(tape_capacity: usize) -> Self {
        Self {
            calc: Calculator::with_tape_capacity(tape_capacity),
            presses: Vec::new(),
        }
    }

    /// Submits labels in order.
    ///
    /// All labels are checked first; if any is unknown nothing is submitted.
    pub fn feed(&mut self, labels: &[String]) -> CliResult<&[Press]> {
        let tokens = labels
            .iter()
            .map(|label| label.parse::<Token>())
            .collect::<Result<Vec<_>, _>>()?;

        let start = self.presses.len();
        for (label, token) in labels.iter().zip(tokens) {
            let display = self.calc.submit(token);
            self.presses.push(Press {
                label: label.clone(),
                display: display.rendered().to_string(),
            });
        }
        info!(
            presses = labels.len(),
            display = self.calc.display().rendered(),
            "labels submitted"
        );
        Ok(&self.presses[start..])
    }

    /// What the display currently shows
    #[must_use]
    pub fn display(&self) -> &str {
        self.calc.display().rendered()
    }

    /// True if the display shows the error sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.calc.display().is_error()
    }

    /// Current tape lines, oldest first
    #[must_use]
    pub fn tape(&self) -> Vec<String> {
        self.calc.history().lines()
    }

    /// Snapshot of everything so far
    #[must_use]
    pub fn transcript(&self) -> Transcript {
        Transcript {
            presses: self.presses.clone(),
            display: self.display().to_string(),
            tape: self.tape(),
        }
    }
}

/// Runs one batch of labels in a fresh session
pub fn run_labels(labels: &[String], tape_capacity: usize) -> CliResult<Transcript> {
    if labels.is_empty() {
        return Err(CliError::invalid_argument("no key labels given"));
    }
    let mut session = Session::new(tape_capacity);
    session.feed(labels)?;
    Ok(session.transcript())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn labels(s: &str) -> Vec<String> {
        split_labels(&[s])
    }

    // ===== split_labels tests =====

    #[test]
    fn test_split_compact_input() {
        assert_eq!(labels("5+3="), vec!["5", "+", "3", "="]);
    }

    #[test]
    fn test_split_spaced_input() {
        assert_eq!(split_labels(&["5", " + ", "3", "="]), vec!["5", "+", "3", "="]);
    }

    #[test]
    fn test_split_unicode_operators() {
        assert_eq!(labels("8÷2"), vec!["8", "÷", "2"]);
    }

    // ===== Session tests =====

    #[test]
    fn test_feed_records_presses() {
        let mut session = Session::new(10);
        let presses = session.feed(&labels("5+3=")).unwrap();
        let shown: Vec<&str> = presses.iter().map(|p| p.display.as_str()).collect();
        assert_eq!(shown, vec!["5", "5", "3", "8.0"]);
        assert_eq!(session.display(), "8.0");
    }

    #[test]
    fn test_feed_returns_only_new_presses() {
        let mut session = Session::new(10);
        session.feed(&labels("12")).unwrap();
        let presses = session.feed(&labels("+1=")).unwrap();
        assert_eq!(presses.len(), 3);
        assert_eq!(presses[2].display, "13.0");
    }

    #[test]
    fn test_feed_rejects_unknown_label_atomically() {
        let mut session = Session::new(10);
        session.feed(&labels("7")).unwrap();
        assert!(session.feed(&labels("+%")).is_err());
        assert_eq!(session.display(), "7");
        assert_eq!(session.transcript().presses.len(), 1);
    }

    #[test]
    fn test_empty_operator_press_renders_zero() {
        let mut session = Session::new(10);
        let presses = session.feed(&labels("+")).unwrap();
        assert_eq!(presses[0].display, "0");
    }

    #[test]
    fn test_error_press() {
        let mut session = Session::new(10);
        session.feed(&labels("9/0=")).unwrap();
        assert!(session.is_error());
        assert!(session.transcript().is_error());
        assert!(session.transcript().presses[3].is_error());
    }

    #[test]
    fn test_transcript_tape() {
        let mut session = Session::new(10);
        session.feed(&labels("4+6=")).unwrap();
        assert_eq!(session.transcript().tape, vec!["4.0 + 6.0 = 10.0"]);
    }

    // ===== run_labels tests =====

    #[test]
    fn test_run_labels() {
        let transcript = run_labels(&labels("6*7="), 10).unwrap();
        assert_eq!(transcript.display, "42.0");
        assert_eq!(transcript.presses.len(), 4);
    }

    #[test]
    fn test_run_labels_empty() {
        assert!(matches!(
            run_labels(&[], 10),
            Err(CliError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_transcript_json_shape() {
        let transcript = run_labels(&labels("1+1="), 10).unwrap();
        let json = serde_json::to_value(&transcript).unwrap();
        assert_eq!(json["display"], "2.0");
        assert_eq!(json["presses"][0]["label"], "1");
        assert_eq!(json["tape"][0], "1.0 + 1.0 = 2.0");
    }
}

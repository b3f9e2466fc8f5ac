//! Stateful calculator session
//!
//! Owns the current [`EvaluatorState`] and the calculation tape, and accepts
//! either tokens or raw keypad labels.

use crate::core::history::History;
use crate::core::{CalcResult, DisplayText, EvaluatorState, Token};
use tracing::debug;

/// A running calculator: current state plus tape
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: EvaluatorState,
    display: DisplayText,
    history: History,
}

impl Calculator {
    /// Creates a calculator showing `0` with an empty tape
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator whose tape keeps at most `max_entries` lines
    #[must_use]
    pub fn with_tape_capacity(max_entries: usize) -> Self {
        Self {
            history: History::with_capacity(max_entries),
            ..Self::default()
        }
    }

    /// Submits one token and returns what the display now shows
    pub fn submit(&mut self, token: Token) -> DisplayText {
        let step = self.state.submit(token);
        debug!(
            %token,
            display = step.display.as_str(),
            buffer = step.state.display_buffer(),
            fresh = step.state.awaiting_fresh_entry(),
            "token applied"
        );

        if let Some(computation) = step.computation {
            self.history.record(computation);
        }
        self.state = step.state;
        self.display = step.display;
        self.display.clone()
    }

    /// Parses a keypad label and submits it.
    ///
    /// Unknown labels leave the calculator untouched.
    pub fn press(&mut self, label: &str) -> CalcResult<DisplayText> {
        let token: Token = label.parse()?;
        Ok(self.submit(token))
    }

    /// Submits every token in order, returning the final display
    pub fn submit_all<I>(&mut self, tokens: I) -> DisplayText
    where
        I: IntoIterator<Item = Token>,
    {
        for token in tokens {
            self.submit(token);
        }
        self.display.clone()
    }

    /// What the display currently shows
    #[must_use]
    pub const fn display(&self) -> &DisplayText {
        &self.display
    }

    /// The current evaluator state
    #[must_use]
    pub const fn state(&self) -> &EvaluatorState {
        &self.state
    }

    /// The calculation tape
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Empties the tape without touching the evaluator
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

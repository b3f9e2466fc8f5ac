//! Evaluator state machine
//!
//! [`EvaluatorState::submit`] is a pure transition: it never mutates the
//! receiver and returns the successor state together with the display text.

use crate::core::{CalcError, Operator, Token};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Display text shown when a division by zero is attempted
pub const ERROR_DISPLAY: &str = "Error";

/// The text a front-end should show after a token was submitted
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayText(String);

impl DisplayText {
    /// Wraps raw display text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The raw text, which may be empty (e.g. operator pressed after Clear)
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The text as it should appear on screen; empty renders as `"0"`
    #[must_use]
    pub fn rendered(&self) -> &str {
        if self.0.is_empty() {
            "0"
        } else {
            &self.0
        }
    }

    /// True if this is the division-by-zero sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.0 == ERROR_DISPLAY
    }
}

impl std::fmt::Display for DisplayText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.rendered())
    }
}

impl PartialEq<&str> for DisplayText {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A completed Equals computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Computation {
    /// The operand captured at the operator press
    pub lhs: f64,
    /// The operator applied; `None` means the result is `rhs` unchanged
    pub operator: Option<Operator>,
    /// The operand typed before Equals
    pub rhs: f64,
    /// The result
    pub result: f64,
}

impl Computation {
    /// Returns a formatted tape line, e.g. `4.0 + 6.0 = 10.0`
    #[must_use]
    pub fn display(&self) -> String {
        match self.operator {
            Some(op) => format!(
                "{} {} {} = {}",
                format_number(self.lhs),
                op,
                format_number(self.rhs),
                format_number(self.result)
            ),
            None => format!(
                "{} = {}",
                format_number(self.rhs),
                format_number(self.result)
            ),
        }
    }
}

/// Everything produced by one transition
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// The successor state
    pub state: EvaluatorState,
    /// The text to show
    pub display: DisplayText,
    /// Set when Equals completed a computation
    pub computation: Option<Computation>,
    /// Set when Equals hit a zero divisor
    pub error: Option<CalcError>,
}

impl Step {
    fn shown(state: EvaluatorState, display: impl Into<String>) -> Self {
        Self {
            state,
            display: DisplayText::new(display),
            computation: None,
            error: None,
        }
    }

    /// The transition kept the buffer as the display
    fn echo(state: EvaluatorState) -> Self {
        let display = state.display_buffer.clone();
        Self::shown(state, display)
    }
}

/// Calculator state between two button presses
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EvaluatorState {
    pending_operand: f64,
    accumulated_result: f64,
    pending_operator: Option<Operator>,
    awaiting_fresh_entry: bool,
    display_buffer: String,
    #[serde(default)]
    after_equals: bool,
}

impl EvaluatorState {
    /// Creates the start-up state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Operand captured at the last operator press (or last result)
    #[must_use]
    pub const fn pending_operand(&self) -> f64 {
        self.pending_operand
    }

    /// Result of the last completed computation
    #[must_use]
    pub const fn accumulated_result(&self) -> f64 {
        self.accumulated_result
    }

    /// Operator waiting for its second operand
    #[must_use]
    pub const fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// True when the next digit starts a new number
    #[must_use]
    pub const fn awaiting_fresh_entry(&self) -> bool {
        self.awaiting_fresh_entry
    }

    /// True when the buffer holds a result produced by Equals
    #[must_use]
    pub const fn after_equals(&self) -> bool {
        self.after_equals
    }

    /// The number being typed, or the last result
    #[must_use]
    pub fn display_buffer(&self) -> &str {
        &self.display_buffer
    }

    /// Applies one token and returns the successor state
    #[must_use]
    pub fn submit(&self, token: Token) -> Step {
        match token {
            Token::Clear => Step::shown(Self::default(), "0"),
            Token::Digit(_) | Token::DecimalPoint => self.enter(token),
            Token::Operator(op) => self.press_operator(op),
            Token::Equals => self.equals(),
        }
    }

    fn enter(&self, token: Token) -> Step {
        let mut next = self.clone();
        if next.awaiting_fresh_entry {
            next.display_buffer.clear();
            next.awaiting_fresh_entry = false;
        }
        next.after_equals = false;

        match token.entry_char() {
            Some('.') if next.display_buffer.contains('.') => {}
            Some('.') => next.display_buffer.push('.'),
            Some(ch) => {
                if next.display_buffer == "0" {
                    next.display_buffer.clear();
                }
                next.display_buffer.push(ch);
            }
            None => {}
        }

        Step::echo(next)
    }

    fn press_operator(&self, op: Operator) -> Step {
        let mut next = self.clone();
        if !next.display_buffer.is_empty() {
            next.pending_operand = parse_operand(&next.display_buffer);
            next.pending_operator = Some(op);
            next.awaiting_fresh_entry = true;
            next.after_equals = false;
        }
        Step::echo(next)
    }

    fn equals(&self) -> Step {
        // Nothing to apply: start-up, Clear, error, or a second Equals in a row.
        // Right after an operator the buffer still holds that operand and is used.
        if self.display_buffer.is_empty() || self.after_equals {
            return Step::shown(self.clone(), format_number(self.accumulated_result));
        }

        let lhs = self.pending_operand;
        let rhs = parse_operand(&self.display_buffer);
        let outcome = match self.pending_operator {
            Some(op) => op.apply(lhs, rhs),
            None => Ok(rhs),
        };

        match outcome {
            Ok(result) => {
                let next = Self {
                    pending_operand: result,
                    accumulated_result: result,
                    pending_operator: self.pending_operator,
                    awaiting_fresh_entry: true,
                    display_buffer: format_number(result),
                    after_equals: true,
                };
                let display = DisplayText::new(next.display_buffer.clone());
                Step {
                    state: next,
                    display,
                    computation: Some(Computation {
                        lhs,
                        operator: self.pending_operator,
                        rhs,
                        result,
                    }),
                    error: None,
                }
            }
            Err(err) => {
                debug!(lhs, rhs, "division by zero");
                let next = Self {
                    awaiting_fresh_entry: true,
                    display_buffer: String::new(),
                    after_equals: false,
                    ..self.clone()
                };
                Step {
                    state: next,
                    display: DisplayText::new(ERROR_DISPLAY),
                    computation: None,
                    error: Some(err),
                }
            }
        }
    }
}

/// Canonical string form of a result.
///
/// Uses the shortest representation that reads back to the same `f64`,
/// always with a fractional part or exponent (`8.0`, `0.5`, `1e20`).
#[must_use]
pub fn format_number(value: f64) -> String {
    format!("{value:?}")
}

/// Reads the display buffer as a number; a lone `.` counts as zero
#[must_use]
pub fn parse_operand(buffer: &str) -> f64 {
    buffer.parse().unwrap_or(0.0)
}

//! Core calculator engine
//!
//! The engine is a strict left-to-right accumulator with a single pending
//! operation. Each token produces a new [`EvaluatorState`] and the text to
//! show on the display.

pub mod history;
mod operations;
pub mod state;
pub mod token;

pub use operations::Operator;
pub use state::{DisplayText, EvaluatorState, Step, ERROR_DISPLAY};
pub use token::{Digit, Token};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Digit token outside 0-9
    #[error("Invalid digit: {0} is not in 0-9")]
    InvalidDigit(u8),
    /// Keypad label that maps to no token
    #[error("Unknown key label: {0:?}")]
    UnknownLabel(String),
}

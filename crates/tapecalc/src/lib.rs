//! tapecalc - pocket calculator engine
//!
//! A strict left-to-right calculator with a single pending operation, driven
//! one keypad token at a time. There is no precedence and no expression
//! parsing: `2 + 3 × 4 =` evaluates `3 × 4`.
//!
//! - [`core::EvaluatorState`] is the pure state machine.
//! - [`calculator::Calculator`] wraps it with a calculation tape.
//! - [`keypad::Keypad`] describes the 5x4 button grid.
//!
//! # Example
//!
//! ```rust
//! use tapecalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for label in ["5", "+", "3"] {
//!     calc.press(label).unwrap();
//! }
//! assert_eq!(calc.press("=").unwrap().as_str(), "8.0");
//!
//! // Division by zero shows a sentinel instead of failing
//! calc.submit(Token::Clear);
//! for label in ["9", "/", "0"] {
//!     calc.press(label).unwrap();
//! }
//! assert!(calc.press("=").unwrap().is_error());
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod calculator;
pub mod core;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::Calculator;
    pub use crate::core::history::History;
    pub use crate::core::state::Computation;
    pub use crate::core::{
        CalcError, CalcResult, Digit, DisplayText, EvaluatorState, Operator, Step, Token,
        ERROR_DISPLAY,
    };
    pub use crate::keypad::{ButtonKind, Keypad, KeypadButton};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut calc = Calculator::new();
        calc.press("2").unwrap();
        calc.press("+").unwrap();
        calc.press("3").unwrap();
        assert_eq!(calc.press("=").unwrap().as_str(), "5.0");
    }

    #[test]
    fn test_keypad_drives_calculator() {
        let keypad = Keypad::new();
        let mut calc = Calculator::new();
        for (row, col) in [(1, 0), (1, 3), (2, 2), (4, 3)] {
            let btn = keypad.get_button_at(row, col).unwrap();
            calc.submit(btn.token);
        }
        // 7 × 6 =
        assert_eq!(calc.display().as_str(), "42.0");
    }

    #[test]
    fn test_state_machine_direct() {
        let step = EvaluatorState::new().submit(Token::digit(5).unwrap());
        assert_eq!(step.display.as_str(), "5");
        assert!(step.computation.is_none());
    }

    #[test]
    fn test_no_precedence() {
        let mut calc = Calculator::new();
        for label in ["2", "+", "3", "*", "4", "="] {
            calc.press(label).unwrap();
        }
        assert_eq!(calc.display().as_str(), "12.0");
    }
}

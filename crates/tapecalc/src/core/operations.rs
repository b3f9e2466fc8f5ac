//! Arithmetic operators
//!
//! Each keypad operator maps to exactly one binary operation on `f64`.

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Type-safe operator enum - compile-time guarantee of valid operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Maps a key character to an operator.
    ///
    /// Accepts both the ASCII keys (`+ - * /`) and the typographic ones
    /// (`− × ÷`), plus `x` for multiplication.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' | 'x' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to `(lhs, rhs)`.
    ///
    /// Only division can fail, and only when the divisor is exactly zero.
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => Self::divide(lhs, rhs),
        }
    }

    fn divide(lhs: f64, rhs: f64) -> CalcResult<f64> {
        if rhs == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(lhs / rhs)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== Symbol tests =====

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "-");
        assert_eq!(Operator::Multiply.symbol(), "×");
        assert_eq!(Operator::Divide.symbol(), "÷");
    }

    #[test]
    fn test_operator_display_matches_symbol() {
        for op in Operator::ALL {
            assert_eq!(op.to_string(), op.symbol());
        }
    }

    // ===== Key mapping tests =====

    #[test]
    fn test_from_char_ascii() {
        assert_eq!(Operator::from_char('+'), Some(Operator::Add));
        assert_eq!(Operator::from_char('-'), Some(Operator::Subtract));
        assert_eq!(Operator::from_char('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('/'), Some(Operator::Divide));
    }

    #[test]
    fn test_from_char_typographic() {
        assert_eq!(Operator::from_char('−'), Some(Operator::Subtract));
        assert_eq!(Operator::from_char('×'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('x'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('÷'), Some(Operator::Divide));
    }

    #[test]
    fn test_from_char_rejects_others() {
        assert_eq!(Operator::from_char('%'), None);
        assert_eq!(Operator::from_char('^'), None);
        assert_eq!(Operator::from_char('='), None);
    }

    #[test]
    fn test_symbol_round_trips_through_from_char() {
        for op in Operator::ALL {
            let ch = op.symbol().chars().next().unwrap();
            assert_eq!(Operator::from_char(ch), Some(op));
        }
    }

    // ===== Arithmetic tests =====

    #[test]
    fn test_apply_add() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), Ok(8.0));
    }

    #[test]
    fn test_apply_subtract() {
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), Ok(2.0));
    }

    #[test]
    fn test_apply_multiply() {
        assert_eq!(Operator::Multiply.apply(6.0, 7.0), Ok(42.0));
    }

    #[test]
    fn test_apply_divide() {
        assert_eq!(Operator::Divide.apply(9.0, 2.0), Ok(4.5));
    }

    #[test]
    fn test_apply_divide_by_zero() {
        assert_eq!(
            Operator::Divide.apply(9.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_apply_divide_by_negative_zero() {
        assert_eq!(
            Operator::Divide.apply(9.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_apply_divide_zero_by_nonzero() {
        assert_eq!(Operator::Divide.apply(0.0, 4.0), Ok(0.0));
    }

    #[test]
    fn test_apply_overflow_is_not_an_error() {
        let result = Operator::Multiply.apply(f64::MAX, 10.0).unwrap();
        assert!(result.is_infinite());
    }

    proptest! {
        #[test]
        fn prop_nonzero_divisor_never_fails(a in -1e9f64..1e9, b in 1e-6f64..1e9) {
            prop_assert!(Operator::Divide.apply(a, b).is_ok());
            prop_assert!(Operator::Divide.apply(a, -b).is_ok());
        }

        #[test]
        fn prop_add_commutative(a in -1e9f64..1e9, b in -1e9f64..1e9) {
            prop_assert_eq!(Operator::Add.apply(a, b), Operator::Add.apply(b, a));
        }
    }
}

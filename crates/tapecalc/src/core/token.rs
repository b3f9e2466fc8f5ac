//! Command tokens
//!
//! One token per button press. Labels map 1:1 onto tokens.

use crate::core::{CalcError, CalcResult, Operator};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A decimal digit, guaranteed to be in 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, rejecting values above 9
    pub fn new(value: u8) -> CalcResult<Self> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(CalcError::InvalidDigit(value))
        }
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character for this digit
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// Parses an ASCII digit character
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| Self(d as u8))
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> CalcResult<Self> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// A single user command accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Append a digit (0-9)
    Digit(Digit),
    /// Append a decimal point
    DecimalPoint,
    /// Capture the operand and set the pending operator
    Operator(Operator),
    /// Apply the pending operator
    Equals,
    /// Reset everything
    Clear,
}

impl Token {
    /// Convenience constructor for digit tokens
    pub fn digit(value: u8) -> CalcResult<Self> {
        Digit::new(value).map(Self::Digit)
    }

    /// Returns the character this token appends to the display, if any
    #[must_use]
    pub const fn entry_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => Some(d.to_char()),
            Self::DecimalPoint => Some('.'),
            Self::Operator(_) | Self::Equals | Self::Clear => None,
        }
    }

    /// Returns the canonical keypad label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_char().to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
        }
    }

    /// Maps a single key character to a token
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            // Comma for locales that write 2,5
            '.' | ',' => Some(Self::DecimalPoint),
            '=' => Some(Self::Equals),
            'C' | 'c' => Some(Self::Clear),
            _ => Digit::from_char(ch)
                .map(Self::Digit)
                .or_else(|| Operator::from_char(ch).map(Self::Operator)),
        }
    }
}

impl FromStr for Token {
    type Err = CalcError;

    fn from_str(label: &str) -> CalcResult<Self> {
        let trimmed = label.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => {
                Self::from_char(ch).ok_or_else(|| CalcError::UnknownLabel(label.to_string()))
            }
            _ => Err(CalcError::UnknownLabel(label.to_string())),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

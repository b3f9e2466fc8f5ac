//! Calculator keypad layout
//!
//! Describes which button sits where, independent of how a front-end draws it.
//!
//! ```text
//! [ C ] [   ] [   ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ . ] [   ] [ = ]
//! ```

use crate::core::{CalcError, CalcResult, Digit, Operator, Token};
use serde::{Deserialize, Serialize};

/// Visual category of a button, used by front-ends for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonKind {
    /// Digits and the decimal point
    Entry,
    /// Arithmetic operators
    Operator,
    /// The equals key
    Equals,
    /// The clear key
    Clear,
}

impl ButtonKind {
    /// Category of the button that submits `token`
    #[must_use]
    pub const fn of(token: Token) -> Self {
        match token {
            Token::Digit(_) | Token::DecimalPoint => Self::Entry,
            Token::Operator(_) => Self::Operator,
            Token::Equals => Self::Equals,
            Token::Clear => Self::Clear,
        }
    }

    /// True for keys drawn with the accent colour
    #[must_use]
    pub const fn is_accent(self) -> bool {
        matches!(self, Self::Operator | Self::Equals)
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadButton {
    /// The token this button submits
    pub token: Token,
    /// Stable identifier, e.g. `btn-7` or `btn-divide`
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button at `(row, col)`
    #[must_use]
    pub fn new(token: Token, row: usize, col: usize) -> Self {
        let id = match token {
            Token::Digit(d) => format!("btn-{}", d.value()),
            Token::DecimalPoint => "btn-decimal".to_string(),
            Token::Operator(op) => format!("btn-{}", op_name(op)),
            Token::Equals => "btn-equals".to_string(),
            Token::Clear => "btn-clear".to_string(),
        };
        Self { token, id, row, col }
    }

    /// The text printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.token.label()
    }

    /// Visual category
    #[must_use]
    pub const fn kind(&self) -> ButtonKind {
        ButtonKind::of(self.token)
    }
}

const fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
    }
}

/// The 5x4 keypad grid; some cells are empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keypad {
    /// Cells in row-major order
    cells: Vec<Option<KeypadButton>>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use Operator::{Add, Divide, Multiply, Subtract};

        let layout: [[Option<Token>; 4]; 5] = [
            [Some(Token::Clear), None, None, Some(Token::Operator(Divide))],
            [digit(7), digit(8), digit(9), Some(Token::Operator(Multiply))],
            [digit(4), digit(5), digit(6), Some(Token::Operator(Subtract))],
            [digit(1), digit(2), digit(3), Some(Token::Operator(Add))],
            [digit(0), Some(Token::DecimalPoint), None, Some(Token::Equals)],
        ];

        let cells = layout
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.iter()
                    .enumerate()
                    .map(move |(col, cell)| (*cell).map(|token| KeypadButton::new(token, row, col)))
            })
            .collect();

        Self {
            cells,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of real buttons (placeholders excluded)
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons().count()
    }

    /// Iterates the real buttons in row-major order
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.cells.iter().flatten()
    }

    /// Gets the button at `(row, col)`; `None` for placeholders or out of range
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)?.as_ref()
        } else {
            None
        }
    }

    /// Finds a button by identifier
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons().find(|b| b.id == id)
    }

    /// Finds the button that a label maps to
    pub fn find_by_label(&self, label: &str) -> CalcResult<&KeypadButton> {
        let token: Token = label.parse()?;
        self.buttons()
            .find(|b| b.token == token)
            .ok_or_else(|| CalcError::UnknownLabel(label.to_string()))
    }

    /// Renders the grid as plain text, one line per row
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| {
                        let label = self
                            .get_button_at(row, col)
                            .map_or_else(|| " ".to_string(), KeypadButton::label);
                        format!("[ {label} ]")
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

fn digit(value: u8) -> Option<Token> {
    Digit::new(value).ok().map(Token::Digit)
}

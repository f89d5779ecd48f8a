//! Input tokens consumed by the calculator state machine.

use std::fmt;

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Binding strength of an operator. Higher levels are reduced first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Additive,
    Multiplicative,
}

impl Operator {
    /// The symbol used for this operator in previews and key input.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Look up an operator by its symbol.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// How tightly this operator binds; `*` and `/` reduce before `+` and `-`.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Subtract => Precedence::Additive,
            Self::Multiply | Self::Divide => Precedence::Multiplicative,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Returns `None` if `value` is not a single decimal digit.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Parse an ASCII digit character.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// The digit as a number, `0..=9`.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The digit as its ASCII character.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// One discrete unit of calculator input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Digit(Digit),
    DecimalPoint,
    Clear,
    Delete,
    ToggleSign,
    Percent,
    Operator(Operator),
    /// Evaluate the accumulated expression (`=`).
    Equals,
}

impl Token {
    /// Map a keypad label (`"7"`, `"DEL"`, `"±"`, ...) to its token.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "C" => Some(Self::Clear),
            "DEL" => Some(Self::Delete),
            "±" => Some(Self::ToggleSign),
            "%" => Some(Self::Percent),
            "." => Some(Self::DecimalPoint),
            "=" => Some(Self::Equals),
            _ => {
                let mut chars = label.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                Digit::from_char(c)
                    .map(Self::Digit)
                    .or_else(|| Operator::from_symbol(c).map(Self::Operator))
            }
        }
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl From<Digit> for Token {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

//! The calculator input state machine.
//!
//! [`CalcState`] is an immutable value. Every token produces a new state via
//! [`CalcState::apply`], which makes the machine trivially testable without
//! any display attached.

use tracing::{debug, trace, warn};

use super::ERROR_MARKER;
use super::format::{format_value, group_digits, strip_separators};
use super::reducer::{Term, evaluate, parse_operand};
use super::token::{Digit, Operator, Token};

/// Complete state of one calculator session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalcState {
    buffer: String,
    pending: Option<Operator>,
    committed: Vec<Term>,
    awaiting_operand: bool,
    sign_toggled: bool,
}

impl Default for CalcState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcState {
    pub fn new() -> Self {
        Self {
            buffer: "0".to_string(),
            pending: None,
            committed: Vec::new(),
            awaiting_operand: false,
            sign_toggled: false,
        }
    }

    /// The number currently being typed, or the error marker.
    pub fn display(&self) -> &str {
        &self.buffer
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    pub fn committed(&self) -> &[Term] {
        &self.committed
    }

    pub fn is_awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    pub fn sign_just_toggled(&self) -> bool {
        self.sign_toggled
    }

    pub fn is_error(&self) -> bool {
        self.buffer == ERROR_MARKER
    }

    /// Whether the state is exactly what a fresh session starts with.
    pub fn is_initial(&self) -> bool {
        *self == Self::new()
    }

    /// Render the part of the expression that is already fixed, for example
    /// `7 + 6 *`. Empty when nothing has been committed.
    pub fn preview(&self) -> String {
        self.preview_with(|operand| operand.to_string())
    }

    /// Like [`preview`](Self::preview), with operands grouped for display.
    pub fn grouped_preview(&self, separator: char) -> String {
        self.preview_with(|operand| group_digits(operand, separator))
    }

    fn preview_with(&self, render: impl Fn(&str) -> String) -> String {
        let mut parts = Vec::with_capacity(self.committed.len() + 1);
        for term in &self.committed {
            parts.push(format!("{} {}", render(term.operand.as_str()), term.operator));
        }
        if let Some(op) = self.pending {
            parts.push(format!("{} {}", render(self.buffer.as_str()), op));
        }
        parts.join(" ")
    }

    /// Apply one token and return the resulting state.
    pub fn apply(&self, token: Token) -> Self {
        if self.is_error() && token != Token::Clear {
            trace!(?token, "ignored while in error state");
            return self.clone();
        }

        let next = match token {
            Token::Digit(digit) => self.push_digit(digit),
            Token::DecimalPoint => self.push_decimal_point(),
            Token::Clear => Self::new(),
            Token::Delete => self.delete_last(),
            Token::ToggleSign => self.toggle_sign(),
            Token::Percent => self.percent(),
            Token::Operator(op) => self.choose_operator(op),
            Token::Equals => self.finalize(),
        };

        trace!(?token, display = %next.buffer, preview = %next.preview(), "applied token");
        next
    }

    fn push_digit(&self, digit: Digit) -> Self {
        let mut next = self.clone();
        let c = digit.as_char();

        if self.sign_toggled {
            // Typing right after a sign toggle multiplies the toggled value.
            next.committed
                .push(Term::new(self.buffer.as_str(), Operator::Multiply));
            next.pending = None;
            next.buffer = c.to_string();
            next.awaiting_operand = false;
            next.sign_toggled = false;
        } else if self.awaiting_operand {
            next.buffer = c.to_string();
            next.awaiting_operand = false;
        } else if self.buffer == "0" {
            next.buffer = c.to_string();
        } else {
            next.buffer.push(c);
        }

        next
    }

    fn push_decimal_point(&self) -> Self {
        let mut next = self.clone();
        next.sign_toggled = false;

        if self.awaiting_operand {
            next.buffer = "0.".to_string();
            next.awaiting_operand = false;
        } else if !self.buffer.contains('.') {
            next.buffer.push('.');
        }

        next
    }

    fn delete_last(&self) -> Self {
        let mut next = self.clone();
        next.sign_toggled = false;

        let mut remainder = strip_separators(&self.buffer);
        remainder.pop();

        if remainder.is_empty() || remainder == "-" {
            next.buffer = "0".to_string();
            next.awaiting_operand = false;
        } else {
            next.buffer = remainder;
        }

        next
    }

    fn toggle_sign(&self) -> Self {
        if self.buffer == "0" {
            return self.clone();
        }

        let mut next = self.clone();
        next.buffer = match self.buffer.strip_prefix('-') {
            Some("") => "0".to_string(),
            Some(rest) => rest.to_string(),
            None => format!("-{}", self.buffer),
        };
        next.sign_toggled = true;
        next
    }

    fn percent(&self) -> Self {
        let mut next = self.clone();
        next.sign_toggled = false;
        next.buffer = match parse_operand(&self.buffer) {
            Ok(value) => format_value(value / 100.0),
            Err(err) => {
                warn!(%err, "percent of a non-numeric entry");
                ERROR_MARKER.to_string()
            }
        };
        next
    }

    fn choose_operator(&self, op: Operator) -> Self {
        let mut next = self.clone();
        next.sign_toggled = false;

        if op == Operator::Subtract
            && self.buffer == "0"
            && self.committed.is_empty()
            && self.pending.is_none()
        {
            // Start typing a negative number instead.
            next.buffer = "-".to_string();
            return next;
        }

        if !self.awaiting_operand {
            match self.pending {
                Some(pending) => next
                    .committed
                    .push(Term::new(self.buffer.as_str(), pending)),
                None => {
                    next.committed.push(Term::new(self.buffer.as_str(), op));
                    next.pending = None;
                    next.awaiting_operand = true;
                    return next;
                }
            }
        }

        next.pending = Some(op);
        next.awaiting_operand = true;
        next
    }

    fn finalize(&self) -> Self {
        let mut next = self.clone();
        next.sign_toggled = false;

        if self.committed.is_empty() && self.pending.is_none() {
            return next;
        }

        let mut terms = self.committed.clone();
        if let Some(op) = self.pending {
            terms.push(Term::new(self.buffer.as_str(), op));
        }

        debug!(terms = terms.len(), terminal = %self.buffer, "evaluating expression");
        next.buffer = match evaluate(&terms, &self.buffer) {
            Ok(result) => result,
            Err(err) => {
                warn!(%err, "evaluation failed");
                ERROR_MARKER.to_string()
            }
        };
        next.committed.clear();
        next.pending = None;
        next.awaiting_operand = true;
        next
    }
}

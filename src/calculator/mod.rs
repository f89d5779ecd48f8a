//! Calculator core.
//!
//! This module provides functionality to:
//! - Turn a stream of keypad tokens into an accumulating expression
//! - Reduce a finished expression with `*`/`/` before `+`/`-`
//! - Format numbers for display

pub mod format;
mod reducer;
mod snapshot;
mod state;
mod token;

pub use reducer::{EvalError, Term, evaluate, parse_operand};
pub use snapshot::Snapshot;
pub use state::CalcState;
pub use token::{Digit, Operator, Precedence, Token};

/// Display value shown after a failed evaluation. Only clear leaves it.
pub const ERROR_MARKER: &str = "Error";

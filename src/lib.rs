//! A keypad-driven calculator.
//!
//! Input arrives one key at a time; the calculator keeps a running
//! expression and evaluates it with `*` and `/` binding tighter than `+`
//! and `-`.

pub mod calculator;
pub mod config;
pub mod keymap;
pub mod keypad;
pub mod session;

pub use calculator::{CalcState, ERROR_MARKER, Snapshot, Token};
pub use config::{Config, DisplayConfig};
pub use session::Session;

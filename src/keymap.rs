//! Keyboard-to-token mapping.
//!
//! Turns a line of key names such as `"1 0 + 5 Enter"` or `"10+5="` into
//! [`Key`]s. Named keys are matched case-insensitively; every other
//! non-whitespace character is a key of its own.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::calculator::{Digit, Operator, Token};
use crate::keypad::Direction;

/// A single key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A key that maps straight to a calculator token.
    Token(Token),
    /// An arrow key moving keypad focus.
    Navigate(Direction),
    /// Press the focused button, or evaluate when nothing is focused.
    Enter,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("unknown key {0:?}")]
    UnknownKey(String),
}

lazy_static! {
    /// Named keys first, then any single non-space character.
    static ref KEY: Regex = Regex::new(
        r"(?i)escape|backspace|enter|del|up|down|left|right|\S"
    ).unwrap();
}

/// Map one key name to a key press.
pub fn parse_key(name: &str) -> Result<Key, KeyError> {
    let key = match name.to_ascii_lowercase().as_str() {
        "escape" | "c" => Key::Token(Token::Clear),
        "backspace" | "del" => Key::Token(Token::Delete),
        "enter" => Key::Enter,
        "up" => Key::Navigate(Direction::Up),
        "down" => Key::Navigate(Direction::Down),
        "left" => Key::Navigate(Direction::Left),
        "right" => Key::Navigate(Direction::Right),
        "." => Key::Token(Token::DecimalPoint),
        "=" => Key::Token(Token::Equals),
        "%" => Key::Token(Token::Percent),
        "±" => Key::Token(Token::ToggleSign),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Digit::from_char(c)
                    .map(Token::Digit)
                    .or_else(|| Operator::from_symbol(c).map(Token::Operator))
                    .map(Key::Token)
                    .ok_or_else(|| KeyError::UnknownKey(name.to_string()))?,
                _ => return Err(KeyError::UnknownKey(name.to_string())),
            }
        }
    };
    Ok(key)
}

/// Split a line into key presses. Whitespace between keys is optional.
pub fn parse_keys(line: &str) -> Result<Vec<Key>, KeyError> {
    KEY.find_iter(line).map(|m| parse_key(m.as_str())).collect()
}

//! An interactive session: calculator state plus keypad focus.

use tracing::debug;

use crate::calculator::{CalcState, Snapshot, Token};
use crate::config::DisplayConfig;
use crate::keymap::Key;
use crate::keypad::Keypad;

/// Owns the state that changes as keys are pressed.
#[derive(Clone, Debug, Default)]
pub struct Session {
    state: CalcState,
    keypad: Keypad,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalcState {
        &self.state
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Handle one key press.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Token(token) => self.apply(token),
            Key::Navigate(direction) => {
                self.keypad.navigate(direction);
                debug!(?direction, selected = ?self.keypad.selected_label(), "moved focus");
            }
            Key::Enter => {
                let token = self.keypad.selected_token().unwrap_or(Token::Equals);
                self.apply(token);
            }
        }
    }

    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) {
        for key in keys {
            self.press(key);
        }
    }

    fn apply(&mut self, token: Token) {
        self.state = self.state.apply(token);
    }

    pub fn snapshot(&self, config: &DisplayConfig) -> Snapshot {
        Snapshot::capture(&self.state, config)
    }
}

//! The on-screen button grid and keyboard focus navigation.

use crate::calculator::Token;

/// Button labels, row by row.
pub const LAYOUT: [[&str; 4]; 5] = [
    ["C", "DEL", "±", "/"],
    ["7", "8", "9", "*"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["0", ".", "%", "="],
];

const COLUMNS: usize = 4;
const ROWS: usize = LAYOUT.len();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Button grid with an optional focused button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Keypad {
    selected: Option<usize>,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_label(&self) -> Option<&'static str> {
        self.selected.map(label_at)
    }

    /// The token produced by pressing the focused button.
    pub fn selected_token(&self) -> Option<Token> {
        self.selected_label().and_then(Token::from_label)
    }

    /// Move focus. The first move focuses the top-left button; moves past an
    /// edge leave the focus where it is.
    pub fn navigate(&mut self, direction: Direction) {
        let Some(index) = self.selected else {
            self.selected = Some(0);
            return;
        };

        let (row, col) = (index / COLUMNS, index % COLUMNS);
        let next = match direction {
            Direction::Up if row > 0 => index - COLUMNS,
            Direction::Down if row < ROWS - 1 => index + COLUMNS,
            Direction::Left if col > 0 => index - 1,
            Direction::Right if col < COLUMNS - 1 => index + 1,
            _ => index,
        };
        self.selected = Some(next);
    }
}

fn label_at(index: usize) -> &'static str {
    LAYOUT[index / COLUMNS][index % COLUMNS]
}

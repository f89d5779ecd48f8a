//! Display snapshot of a calculator state.

use serde::Serialize;

use super::format::group_digits;
use super::state::CalcState;
use crate::config::DisplayConfig;

/// What a display shows after a token has been applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// The entry formatted for display (with thousand separators).
    pub display: String,
    /// The entry as kept by the calculator (no separators).
    pub raw: String,
    /// The committed part of the expression, empty if hidden or nothing is committed.
    pub preview: String,
    /// Whether the calculator is in the error state.
    pub is_error: bool,
}

impl Snapshot {
    pub fn capture(state: &CalcState, config: &DisplayConfig) -> Self {
        let preview = if config.show_preview {
            state.grouped_preview(config.group_separator)
        } else {
            String::new()
        };

        Self {
            display: group_digits(state.display(), config.group_separator),
            raw: state.display().to_string(),
            preview,
            is_error: state.is_error(),
        }
    }

    /// Two-line rendering: the preview above the entry.
    pub fn to_text(&self) -> String {
        if self.preview.is_empty() {
            self.display.clone()
        } else {
            format!("{}\n{}", self.preview, self.display)
        }
    }
}

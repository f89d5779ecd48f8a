//! Number formatting for display.
//!
//! The calculator core keeps plain numeric strings. Grouping separators are
//! only added here, on the way to the screen, and stripped again before any
//! numeric interpretation.

use super::ERROR_MARKER;

/// Separator the core strips before parsing a number.
pub const GROUP_SEPARATOR: char = ',';

/// Remove grouping separators from a numeric string.
pub fn strip_separators(text: &str) -> String {
    text.chars().filter(|&c| c != GROUP_SEPARATOR).collect()
}

/// Convert a computed value to the string kept in the entry buffer.
///
/// Uses the shortest representation that round-trips, without a trailing
/// `.0` for whole numbers. Negative zero is shown as `0`.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Insert `separator` between every group of three integer digits.
///
/// The sign and the fractional part (including a dangling `.` while the user
/// is still typing) are kept verbatim. Text that is not a plain decimal
/// number, such as the error marker, is returned unchanged.
pub fn group_digits(text: &str, separator: char) -> String {
    if text == ERROR_MARKER {
        return text.to_string();
    }

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot_pos) => unsigned.split_at(dot_pos),
        None => (unsigned, ""),
    };

    if !int_part.chars().all(|c| c.is_ascii_digit()) {
        return text.to_string();
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    format!("{}{}{}", sign, grouped, frac_part)
}

/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const BLUE: &str = "\x1b[34m";

/// Render an optional text field, greyed out as "-" when empty.
///
/// Example:
/// `colorize_optional("")` → "<grey>-<reset>"
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}-{RESET}")
    } else {
        value.to_string()
    }
}

/// Revenue in green when positive, grey when zero.
pub fn colorize_amount(value: f64, text: &str) -> String {
    if value > 0.0 {
        format!("{GREEN}{text}{RESET}")
    } else {
        format!("{GREY}{text}{RESET}")
    }
}

pub fn paint(color: &str, text: &str) -> String {
    format!("{color}{text}{RESET}")
}

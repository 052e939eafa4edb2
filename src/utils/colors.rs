/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey out placeholder values ("none recorded", "--") so real numbers
/// stand out in the snapshot view.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--" || v == "none recorded" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

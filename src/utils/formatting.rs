//! Formatting utilities used for CLI outputs.

use chrono::Duration;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render an elapsed span the way a tired parent reads it:
/// minutes below an hour, hours+minutes below two days, days+hours beyond.
pub fn format_elapsed(d: Duration) -> String {
    let mins = d.num_minutes().max(0);

    if mins < 60 {
        return format!("{} min", mins);
    }

    let hours = mins / 60;
    if hours < 48 {
        return format!("{}h {:02}m", hours, mins % 60);
    }

    format!("{}d {}h", hours / 24, hours % 24)
}

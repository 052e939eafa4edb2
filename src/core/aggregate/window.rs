use chrono::{Duration, NaiveDateTime};

/// Reporting window anchored at an explicit reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Timestamps within the 24 hours ending at the reference instant.
    Trailing24h,
    /// Timestamps on the reference instant's calendar date.
    CalendarDay,
}

impl Window {
    pub fn contains(&self, ts: NaiveDateTime, now: NaiveDateTime) -> bool {
        if ts > now {
            return false;
        }
        match self {
            Window::Trailing24h => now - ts < Duration::hours(24),
            Window::CalendarDay => ts.date() == now.date(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Window::Trailing24h => "last 24 h",
            Window::CalendarDay => "today",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn trailing_window_is_half_open() {
        let now = at(2, 8, 0);
        assert!(Window::Trailing24h.contains(at(1, 8, 1), now));
        assert!(Window::Trailing24h.contains(now, now));
        // exactly 24 h ago is already outside
        assert!(!Window::Trailing24h.contains(at(1, 8, 0), now));
    }

    #[test]
    fn calendar_day_ignores_time_of_day() {
        let now = at(2, 8, 0);
        assert!(Window::CalendarDay.contains(at(2, 0, 5), now));
        assert!(!Window::CalendarDay.contains(at(1, 23, 59), now));
    }
}

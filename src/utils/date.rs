//! Date helpers: parsing and the period expressions accepted by
//! `list --period` and `export --range`.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a period expression into inclusive date bounds.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - any of the above as `start:end` (same granularity on both sides)
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidDate(format!(
                "'{}': start and end must use the same format",
                p
            )));
        }

        let (s, _) = parse_bound(start)?;
        let (_, e) = parse_bound(end)?;
        Ok((s, e))
    } else {
        parse_bound(p.trim())
    }
}

/// Expand one bound expression into its (first_day, last_day) span.
fn parse_bound(s: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match s.len() {
        // YYYY
        4 => {
            let y: i32 = s
                .parse()
                .map_err(|_| AppError::InvalidDate(s.to_string()))?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
            Ok((first, last))
        }
        // YYYY-MM
        7 => {
            let y: i32 = s[0..4]
                .parse()
                .map_err(|_| AppError::InvalidDate(s.to_string()))?;
            let m: u32 = s[5..7]
                .parse()
                .map_err(|_| AppError::InvalidDate(s.to_string()))?;
            let first = NaiveDate::from_ymd_opt(y, m, 1)
                .ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
            let last = last_day_of_month(y, m)
                .ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidDate(format!(
            "'{}': unsupported period format",
            s
        ))),
    }
}

fn last_day_of_month(y: i32, m: u32) -> Option<NaiveDate> {
    let next_month = if m == 12 {
        NaiveDate::from_ymd_opt(y + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(y, m + 1, 1)?
    };
    next_month.pred_opt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_day() {
        let (s, e) = parse_period("2024-02-11").unwrap();
        assert_eq!(s, NaiveDate::from_ymd_opt(2024, 2, 11).unwrap());
        assert_eq!(s, e);
    }

    #[test]
    fn parses_month_span_with_leap_day() {
        let (s, e) = parse_period("2024-02").unwrap();
        assert_eq!(s, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(e, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn parses_year_range() {
        let (s, e) = parse_period("2023:2024").unwrap();
        assert_eq!(s, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(e, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn rejects_mixed_granularity_range() {
        assert!(parse_period("2024:2024-06").is_err());
    }
}

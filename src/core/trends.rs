//! Rolling statistics: daily totals smoothed with a trailing 7-day simple
//! moving average. The average needs a full 7-day window before it says
//! anything; a short series gets daily values only.

use crate::core::aggregate::KcalPerMl;
use crate::models::event::{CareDetails, CareEvent};
use crate::models::milk::MilkType;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub const SMA_WINDOW: usize = 7;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyPoint {
    pub calories_kcal: f64,
    pub pumped_ml: f64,
    pub maternal_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub day: DailyPoint,
    pub calories_sma: Option<f64>,
    pub pumped_sma: Option<f64>,
    pub maternal_pct_sma: Option<f64>,
}

/// Daily totals over the contiguous span from first to last observed date.
/// Days with no events are zero days, not missing samples: the average is
/// over calendar time, not over active days.
pub fn daily_series(events: &[CareEvent], kcal: &KcalPerMl) -> Vec<(NaiveDate, DailyPoint)> {
    #[derive(Default)]
    struct Accum {
        calories: f64,
        milk_volume: f64,
        maternal_volume: f64,
        pumped: f64,
    }

    let mut by_day: BTreeMap<NaiveDate, Accum> = BTreeMap::new();

    for ev in events {
        let acc = by_day.entry(ev.date).or_default();
        match &ev.details {
            CareDetails::MilkFeed { volume_ml, milk } => {
                acc.calories += volume_ml * kcal.for_milk(*milk);
                acc.milk_volume += volume_ml;
                if *milk == MilkType::Maternal {
                    acc.maternal_volume += volume_ml;
                }
            }
            CareDetails::Pumping { volume_ml } => {
                acc.pumped += volume_ml;
            }
            _ => {}
        }
    }

    let (first, last) = match (by_day.keys().next(), by_day.keys().next_back()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return Vec::new(),
    };

    let mut out = Vec::new();
    let mut d = first;
    while d <= last {
        let point = match by_day.get(&d) {
            Some(acc) => DailyPoint {
                calories_kcal: acc.calories,
                pumped_ml: acc.pumped,
                maternal_pct: if acc.milk_volume > 0.0 {
                    acc.maternal_volume / acc.milk_volume * 100.0
                } else {
                    0.0
                },
            },
            None => DailyPoint::default(),
        };
        out.push((d, point));
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}

/// Attach the trailing 7-day averages. A day earlier than index 6 has no
/// full window behind it and gets `None`.
pub fn with_sma(series: &[(NaiveDate, DailyPoint)]) -> Vec<TrendPoint> {
    series
        .iter()
        .enumerate()
        .map(|(i, (date, day))| {
            let (calories_sma, pumped_sma, maternal_pct_sma) = if i + 1 >= SMA_WINDOW {
                let tail = &series[i + 1 - SMA_WINDOW..=i];
                let n = SMA_WINDOW as f64;
                (
                    Some(tail.iter().map(|(_, p)| p.calories_kcal).sum::<f64>() / n),
                    Some(tail.iter().map(|(_, p)| p.pumped_ml).sum::<f64>() / n),
                    Some(tail.iter().map(|(_, p)| p.maternal_pct).sum::<f64>() / n),
                )
            } else {
                (None, None, None)
            };

            TrendPoint {
                date: *date,
                day: day.clone(),
                calories_sma,
                pumped_sma,
                maternal_pct_sma,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn feed(day: u32, volume: f64, milk: MilkType) -> CareEvent {
        CareEvent {
            id: 0,
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            details: CareDetails::MilkFeed {
                volume_ml: volume,
                milk,
            },
            source: "cli".into(),
            created_at: String::new(),
        }
    }

    #[test]
    fn empty_series_is_empty() {
        assert!(daily_series(&[], &KcalPerMl::default()).is_empty());
    }

    #[test]
    fn gap_days_count_as_zero() {
        let events = vec![
            feed(1, 100.0, MilkType::Maternal),
            feed(3, 100.0, MilkType::Maternal),
        ];

        let series = daily_series(&events, &KcalPerMl::default());
        assert_eq!(series.len(), 3);
        assert_eq!(series[1].1, DailyPoint::default());
    }

    #[test]
    fn sma_absent_until_a_full_window() {
        // Nine days of 100 ml maternal feeds: 67 kcal/day.
        let events: Vec<CareEvent> = (1..=9).map(|d| feed(d, 100.0, MilkType::Maternal)).collect();

        let trend = with_sma(&daily_series(&events, &KcalPerMl::default()));

        for p in &trend[..6] {
            assert!(p.calories_sma.is_none());
        }
        for p in &trend[6..] {
            let sma = p.calories_sma.unwrap();
            assert!((sma - 67.0).abs() < 1e-9);
        }
    }

    #[test]
    fn sma_is_mean_of_trailing_week() {
        // 70 ml on day 1, 140 ml on every later day.
        let mut events = vec![feed(1, 70.0, MilkType::Maternal)];
        events.extend((2..=7).map(|d| feed(d, 140.0, MilkType::Maternal)));

        let trend = with_sma(&daily_series(&events, &KcalPerMl::default()));

        // day index 6: (70 + 6×140) × 0.67 / 7
        let expected = (70.0 + 6.0 * 140.0) * 0.67 / 7.0;
        let sma = trend[6].calories_sma.unwrap();
        assert!((sma - expected).abs() < 1e-9);
    }

    #[test]
    fn maternal_pct_zero_on_formula_only_days() {
        let events = vec![feed(1, 100.0, MilkType::Puramino)];
        let series = daily_series(&events, &KcalPerMl::default());
        assert_eq!(series[0].1.maternal_pct, 0.0);
    }
}

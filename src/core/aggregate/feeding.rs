use super::KcalPerMl;
use super::window::Window;
use crate::models::event::{CareDetails, CareEvent};
use crate::models::milk::MilkType;
use chrono::NaiveDateTime;

/// Feeding figures: bottle volumes and calories in-window, breastfeeding
/// minutes in-window, and the most recent feeding of any kind.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FeedingMetrics {
    pub milk_volume_ml: f64,
    pub calories_kcal: f64,
    /// Share of the in-window bottle volume that was maternal milk, in
    /// [0, 100]. Zero when no volume was taken.
    pub maternal_pct: f64,
    pub breastfeeding_min: f64,
    /// Most recent bottle or breast feed ≤ now, over the whole history.
    pub last_feed: Option<NaiveDateTime>,
}

pub fn compute(
    events: &[&CareEvent],
    now: NaiveDateTime,
    window: Window,
    kcal: &KcalPerMl,
) -> FeedingMetrics {
    let mut m = FeedingMetrics::default();
    let mut maternal_volume = 0.0;

    for ev in events {
        match &ev.details {
            CareDetails::MilkFeed { volume_ml, milk } => {
                if window.contains(ev.timestamp(), now) {
                    m.milk_volume_ml += volume_ml;
                    m.calories_kcal += volume_ml * kcal.for_milk(*milk);
                    if *milk == MilkType::Maternal {
                        maternal_volume += volume_ml;
                    }
                }
                m.last_feed = m.last_feed.max(Some(ev.timestamp()));
            }
            CareDetails::BreastFeed { duration_min } => {
                if window.contains(ev.timestamp(), now) {
                    m.breastfeeding_min += duration_min;
                }
                m.last_feed = m.last_feed.max(Some(ev.timestamp()));
            }
            _ => {}
        }
    }

    if m.milk_volume_ml > 0.0 {
        m.maternal_pct = maternal_volume / m.milk_volume_ml * 100.0;
    }

    m
}

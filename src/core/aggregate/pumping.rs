use super::window::Window;
use crate::models::event::{CareDetails, CareEvent};
use chrono::NaiveDateTime;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PumpingMetrics {
    pub pumped_volume_ml: f64,
    pub session_count: usize,
    /// Most recent pumping session on the reference day, for the
    /// "time since last session" line.
    pub last_session_today: Option<NaiveDateTime>,
}

pub fn compute(events: &[&CareEvent], now: NaiveDateTime, window: Window) -> PumpingMetrics {
    let mut m = PumpingMetrics::default();

    for ev in events {
        if let CareDetails::Pumping { volume_ml } = &ev.details {
            if window.contains(ev.timestamp(), now) {
                m.pumped_volume_ml += volume_ml;
                m.session_count += 1;
            }
            if ev.timestamp().date() == now.date() {
                m.last_session_today = m.last_session_today.max(Some(ev.timestamp()));
            }
        }
    }

    m
}

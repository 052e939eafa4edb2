use super::window::Window;
use crate::models::event::{CareDetails, CareEvent};
use chrono::NaiveDateTime;

/// Ostomy care figures. Bridge sums and bowel counts are windowed; the
/// "time since last" anchors search the whole history, because a bag worn
/// for three days is exactly the thing to surface.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StomaMetrics {
    pub bridged_volume_ml: f64,
    pub bridge_count: usize,
    pub bowel_count: usize,
    pub last_reservoir_empty: Option<NaiveDateTime>,
    pub last_bag_change: Option<NaiveDateTime>,
}

pub fn compute(
    events: &[&CareEvent],
    now: NaiveDateTime,
    window: Window,
    bowel_window: Window,
) -> StomaMetrics {
    let mut m = StomaMetrics::default();

    for ev in events {
        match &ev.details {
            CareDetails::StomaBridge { volume_ml } => {
                if window.contains(ev.timestamp(), now) {
                    m.bridged_volume_ml += volume_ml;
                    m.bridge_count += 1;
                }
            }
            CareDetails::BowelMovement { occurred } => {
                if *occurred && bowel_window.contains(ev.timestamp(), now) {
                    m.bowel_count += 1;
                }
            }
            CareDetails::ReservoirEmpty => {
                m.last_reservoir_empty = m.last_reservoir_empty.max(Some(ev.timestamp()));
            }
            CareDetails::BagChange => {
                m.last_bag_change = m.last_bag_change.max(Some(ev.timestamp()));
            }
            _ => {}
        }
    }

    m
}

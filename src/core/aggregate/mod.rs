//! Metric aggregation over the parsed record set.
//!
//! `compute` is a pure function: the reference instant and the policy both
//! come in as parameters, so the same dataset always yields the same
//! snapshot. Sums over empty sets are 0 and shares of a zero total are 0;
//! an empty dataset produces a snapshot of zeros and "none recorded"s.

pub mod feeding;
pub mod pumping;
pub mod stoma;
pub mod window;

use crate::core::parse::RowWarning;
use crate::models::event::CareEvent;
use crate::models::milk::MilkType;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use window::Window;

pub use feeding::FeedingMetrics;
pub use pumping::PumpingMetrics;
pub use stoma::StomaMetrics;

/// Calorie coefficients (kcal/ml) per milk type. Configurable because the
/// pediatric guidance changed along the way; these are the values the last
/// guidance gave us.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct KcalPerMl {
    pub maternal: f64,
    pub puramino: f64,
    pub nutramigen: f64,
}

impl Default for KcalPerMl {
    fn default() -> Self {
        Self {
            maternal: 0.67,
            puramino: 0.72,
            nutramigen: 0.67,
        }
    }
}

impl KcalPerMl {
    pub fn for_milk(&self, milk: MilkType) -> f64 {
        match milk {
            MilkType::Maternal => self.maternal,
            MilkType::Puramino => self.puramino,
            MilkType::Nutramigen => self.nutramigen,
        }
    }
}

/// Aggregation policy: the knobs that changed between releases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Policy {
    pub kcal_per_ml: KcalPerMl,
    /// Bowel movements were counted per-24h in some releases and per-day in
    /// others; the window is policy, not code.
    pub bowel_window: Window,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            kcal_per_ml: KcalPerMl::default(),
            bowel_window: Window::Trailing24h,
        }
    }
}

#[derive(Debug)]
pub struct Snapshot {
    pub now: NaiveDateTime,
    pub window: Window,
    /// Events that entered the computation (future rows excluded).
    pub total_events: usize,
    pub feeding: FeedingMetrics,
    pub stoma: StomaMetrics,
    pub pumping: PumpingMetrics,
    /// Rows excluded because their timestamp lies after `now`.
    pub future: Vec<RowWarning>,
}

pub fn compute(
    events: &[CareEvent],
    now: NaiveDateTime,
    window: Window,
    policy: &Policy,
) -> Snapshot {
    // Future rows never reach the per-category metrics, but they are a
    // warning condition for the caller, not corruption.
    let mut future = Vec::new();
    let mut usable: Vec<&CareEvent> = Vec::with_capacity(events.len());

    for ev in events {
        if ev.timestamp() > now {
            future.push(RowWarning::FutureTimestamp {
                id: ev.id,
                timestamp: ev.timestamp(),
            });
        } else {
            usable.push(ev);
        }
    }

    Snapshot {
        now,
        window,
        total_events: usable.len(),
        feeding: feeding::compute(&usable, now, window, &policy.kcal_per_ml),
        stoma: stoma::compute(&usable, now, window, policy.bowel_window),
        pumping: pumping::compute(&usable, now, window),
        future,
    }
}

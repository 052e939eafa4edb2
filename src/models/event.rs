use super::category::Category;
use super::milk::MilkType;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Per-category payload of a care event. A record carries exactly the fields
/// its category needs; nothing else exists on the variant.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum CareDetails {
    MilkFeed { volume_ml: f64, milk: MilkType },
    BreastFeed { duration_min: f64 },
    StomaBridge { volume_ml: f64 },
    BowelMovement { occurred: bool },
    ReservoirEmpty,
    BagChange,
    Pumping { volume_ml: f64 },
}

impl CareDetails {
    pub fn category(&self) -> Category {
        match self {
            CareDetails::MilkFeed { .. } => Category::MilkFeed,
            CareDetails::BreastFeed { .. } => Category::BreastFeed,
            CareDetails::StomaBridge { .. } => Category::StomaBridge,
            CareDetails::BowelMovement { .. } => Category::BowelMovement,
            CareDetails::ReservoirEmpty => Category::ReservoirEmpty,
            CareDetails::BagChange => Category::BagChange,
            CareDetails::Pumping { .. } => Category::Pumping,
        }
    }

    /// One-line summary for tables ("120 ml Puramino", "15 min", "yes", …).
    pub fn summary(&self) -> String {
        match self {
            CareDetails::MilkFeed { volume_ml, milk } => {
                format!("{} ml {}", crate::utils::num::format_decimal(*volume_ml), milk.label())
            }
            CareDetails::BreastFeed { duration_min } => {
                format!("{} min", crate::utils::num::format_decimal(*duration_min))
            }
            CareDetails::StomaBridge { volume_ml } => {
                format!("{} ml", crate::utils::num::format_decimal(*volume_ml))
            }
            CareDetails::BowelMovement { occurred } => {
                if *occurred { "yes".to_string() } else { "no".to_string() }
            }
            CareDetails::ReservoirEmpty | CareDetails::BagChange => String::new(),
            CareDetails::Pumping { volume_ml } => {
                format!("{} ml", crate::utils::num::format_decimal(*volume_ml))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CareEvent {
    pub id: i64,               // ⇔ events.id (store insertion order)
    pub date: NaiveDate,       // ⇔ events.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,       // ⇔ events.time (TEXT "HH:MM")
    pub details: CareDetails,  // ⇔ category + its payload columns
    pub source: String,        // ⇔ events.source (TEXT, default 'cli')
    pub created_at: String,    // ⇔ events.created_at (TEXT, ISO8601)
}

impl CareEvent {
    /// High-level constructor for events created from the CLI.
    /// - `id = 0` until the store assigns one
    /// - `source = "cli"`
    /// - `created_at = now() in ISO8601`
    pub fn new(date: NaiveDate, time: NaiveTime, details: CareDetails) -> Self {
        Self {
            id: 0,
            date,
            time,
            details,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    /// Derived timestamp used for all windowing.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn category(&self) -> Category {
        self.details.category()
    }
}

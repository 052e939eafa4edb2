//! Store-adapter boundary: raw store rows become typed care events here.
//! A row that cannot be typed is quarantined with a warning and never
//! reaches the metrics; one bad hand-edit must not take the summary down.

use crate::db::models::RawEventRow;
use crate::models::category::Category;
use crate::models::event::{CareDetails, CareEvent};
use crate::models::milk::MilkType;
use crate::utils::{date, num, time};
use chrono::NaiveDateTime;
use std::fmt;

/// Non-fatal conditions attached to individual rows.
#[derive(Debug, Clone, PartialEq)]
pub enum RowWarning {
    Malformed { id: i64, reason: String },
    FutureTimestamp { id: i64, timestamp: NaiveDateTime },
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowWarning::Malformed { id, reason } => {
                write!(f, "Row {} skipped: {}", id, reason)
            }
            RowWarning::FutureTimestamp { id, timestamp } => {
                write!(
                    f,
                    "Row {} is in the future ({}) and is excluded from the metrics",
                    id,
                    timestamp.format("%Y-%m-%d %H:%M")
                )
            }
        }
    }
}

pub struct ParsedSet {
    pub events: Vec<CareEvent>,
    pub warnings: Vec<RowWarning>,
}

/// Parse every row, collecting the bad ones as warnings.
pub fn parse_rows(rows: &[RawEventRow]) -> ParsedSet {
    let mut events = Vec::with_capacity(rows.len());
    let mut warnings = Vec::new();

    for raw in rows {
        match parse_row(raw) {
            Ok(ev) => events.push(ev),
            Err(reason) => warnings.push(RowWarning::Malformed { id: raw.id, reason }),
        }
    }

    ParsedSet { events, warnings }
}

/// Type one raw row. Fields the category does not use are ignored, whatever
/// they contain; fields it does use must parse.
pub fn parse_row(raw: &RawEventRow) -> Result<CareEvent, String> {
    let d = date::parse_date(&raw.date).ok_or_else(|| format!("bad date '{}'", raw.date))?;
    let t = time::parse_time(&raw.time).ok_or_else(|| format!("bad time '{}'", raw.time))?;

    let category = Category::from_db_str(raw.category.trim())
        .ok_or_else(|| format!("unknown category '{}'", raw.category))?;

    let details = match category {
        Category::MilkFeed => {
            let volume_ml = require_decimal(&raw.milk_volume_ml, "milk_volume_ml")?;
            let milk = MilkType::from_db_str(raw.milk_type.trim().to_lowercase().as_str())
                .ok_or_else(|| format!("unknown milk type '{}'", raw.milk_type))?;
            CareDetails::MilkFeed { volume_ml, milk }
        }
        Category::BreastFeed => CareDetails::BreastFeed {
            duration_min: require_decimal(&raw.breastfeeding_min, "breastfeeding_min")?,
        },
        Category::StomaBridge => CareDetails::StomaBridge {
            volume_ml: require_decimal(&raw.bridged_volume_ml, "bridged_volume_ml")?,
        },
        Category::BowelMovement => CareDetails::BowelMovement {
            occurred: num::parse_flag(&raw.bowel_movement)
                .ok_or_else(|| format!("bad bowel_movement flag '{}'", raw.bowel_movement))?,
        },
        Category::ReservoirEmpty => CareDetails::ReservoirEmpty,
        Category::BagChange => CareDetails::BagChange,
        Category::Pumping => CareDetails::Pumping {
            volume_ml: require_decimal(&raw.pumped_volume_ml, "pumped_volume_ml")?,
        },
    };

    Ok(CareEvent {
        id: raw.id,
        date: d,
        time: t,
        details,
        source: raw.source.clone(),
        created_at: raw.created_at.clone(),
    })
}

fn require_decimal(raw: &str, field: &str) -> Result<f64, String> {
    num::parse_decimal(raw).ok_or_else(|| format!("bad {} '{}'", field, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk_row(volume: &str, milk: &str) -> RawEventRow {
        RawEventRow {
            id: 1,
            date: "2024-01-01".into(),
            time: "08:00".into(),
            category: "milk_feed".into(),
            milk_volume_ml: volume.into(),
            milk_type: milk.into(),
            source: "cli".into(),
            created_at: "2024-01-01T08:00:00".into(),
            ..RawEventRow::default()
        }
    }

    #[test]
    fn parses_comma_decimal_volume() {
        let ev = parse_row(&milk_row("87,5", "maternal")).unwrap();
        assert_eq!(
            ev.details,
            CareDetails::MilkFeed {
                volume_ml: 87.5,
                milk: MilkType::Maternal
            }
        );
    }

    #[test]
    fn accepts_legacy_spanish_fields() {
        let ev = parse_row(&milk_row("100", "materna")).unwrap();
        assert!(matches!(
            ev.details,
            CareDetails::MilkFeed {
                milk: MilkType::Maternal,
                ..
            }
        ));

        let row = RawEventRow {
            id: 2,
            date: "2024-01-01".into(),
            time: "09:15".into(),
            category: "bowel_movement".into(),
            bowel_movement: "sí".into(),
            ..RawEventRow::default()
        };
        let ev = parse_row(&row).unwrap();
        assert_eq!(ev.details, CareDetails::BowelMovement { occurred: true });
    }

    #[test]
    fn quarantines_unknown_category() {
        let mut row = milk_row("100", "maternal");
        row.category = "medication".into();

        let parsed = parse_rows(&[row]);
        assert!(parsed.events.is_empty());
        assert!(matches!(
            parsed.warnings.as_slice(),
            [RowWarning::Malformed { id: 1, .. }]
        ));
    }

    #[test]
    fn quarantines_unknown_milk_type() {
        let parsed = parse_rows(&[milk_row("100", "soy")]);
        assert!(parsed.events.is_empty());
        assert_eq!(parsed.warnings.len(), 1);
    }

    #[test]
    fn bad_row_does_not_block_good_rows() {
        let good = milk_row("100", "maternal");
        let mut bad = milk_row("abc", "maternal");
        bad.id = 2;

        let parsed = parse_rows(&[good, bad]);
        assert_eq!(parsed.events.len(), 1);
        assert_eq!(parsed.warnings.len(), 1);
    }

    #[test]
    fn irrelevant_fields_are_ignored() {
        let mut row = RawEventRow {
            id: 3,
            date: "2024-01-02".into(),
            time: "10:00".into(),
            category: "bag_change".into(),
            ..RawEventRow::default()
        };
        // leftover junk from a hand edit in an unrelated column
        row.milk_volume_ml = "???".into();

        let ev = parse_row(&row).unwrap();
        assert_eq!(ev.details, CareDetails::BagChange);
    }
}

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::event::{CareDetails, CareEvent};
use crate::models::milk::MilkType;
use crate::ui::messages::{success, warning};
use chrono::NaiveDateTime;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Assemble the tagged payload from the CLI options, rejecting both
    /// missing and stray fields: a bag change with `--ml` is a typo worth
    /// stopping, not a row worth storing.
    pub fn build_details(
        category: Category,
        volume_ml: Option<f64>,
        milk: Option<MilkType>,
        minutes: Option<f64>,
        bowel: Option<bool>,
    ) -> AppResult<CareDetails> {
        let name = category.to_db_str();

        match category {
            Category::MilkFeed => {
                forbid(minutes.is_some(), name, "--minutes")?;
                forbid(bowel.is_some(), name, "--bm")?;
                Ok(CareDetails::MilkFeed {
                    volume_ml: require(volume_ml, name, "--ml")?,
                    milk: require(milk, name, "--milk")?,
                })
            }
            Category::BreastFeed => {
                forbid(volume_ml.is_some(), name, "--ml")?;
                forbid(milk.is_some(), name, "--milk")?;
                forbid(bowel.is_some(), name, "--bm")?;
                Ok(CareDetails::BreastFeed {
                    duration_min: require(minutes, name, "--minutes")?,
                })
            }
            Category::StomaBridge => {
                forbid(milk.is_some(), name, "--milk")?;
                forbid(minutes.is_some(), name, "--minutes")?;
                forbid(bowel.is_some(), name, "--bm")?;
                Ok(CareDetails::StomaBridge {
                    volume_ml: require(volume_ml, name, "--ml")?,
                })
            }
            Category::BowelMovement => {
                forbid(volume_ml.is_some(), name, "--ml")?;
                forbid(milk.is_some(), name, "--milk")?;
                forbid(minutes.is_some(), name, "--minutes")?;
                Ok(CareDetails::BowelMovement {
                    occurred: require(bowel, name, "--bm")?,
                })
            }
            Category::ReservoirEmpty | Category::BagChange => {
                forbid(volume_ml.is_some(), name, "--ml")?;
                forbid(milk.is_some(), name, "--milk")?;
                forbid(minutes.is_some(), name, "--minutes")?;
                forbid(bowel.is_some(), name, "--bm")?;
                Ok(match category {
                    Category::ReservoirEmpty => CareDetails::ReservoirEmpty,
                    _ => CareDetails::BagChange,
                })
            }
            Category::Pumping => {
                forbid(milk.is_some(), name, "--milk")?;
                forbid(minutes.is_some(), name, "--minutes")?;
                forbid(bowel.is_some(), name, "--bm")?;
                Ok(CareDetails::Pumping {
                    volume_ml: require(volume_ml, name, "--ml")?,
                })
            }
        }
    }

    /// Append the record and audit-log the operation. A future timestamp is
    /// stored anyway (the store is authoritative and hand-editable), with a
    /// warning: the metrics will ignore the row until its time comes.
    pub fn apply(pool: &mut DbPool, ev: &CareEvent, now: NaiveDateTime) -> AppResult<()> {
        let id = insert_event(&pool.conn, ev)?;

        if ev.timestamp() > now {
            warning(format!(
                "Timestamp {} is in the future; the row is stored but ignored by the metrics for now.",
                ev.timestamp().format("%Y-%m-%d %H:%M")
            ));
        }

        if let Err(e) = ttlog(
            &pool.conn,
            "add",
            ev.category().to_db_str(),
            &format!(
                "id={} date={} time={} {}",
                id,
                ev.date_str(),
                ev.time_str(),
                ev.details.summary()
            ),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!(
            "Recorded {} on {} at {}.",
            ev.category().label(),
            ev.date_str(),
            ev.time_str()
        ));

        Ok(())
    }
}

fn require<T>(value: Option<T>, category: &'static str, field: &'static str) -> AppResult<T> {
    value.ok_or(AppError::MissingField { category, field })
}

fn forbid(present: bool, category: &'static str, field: &'static str) -> AppResult<()> {
    if present {
        Err(AppError::UnexpectedField { category, field })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milk_feed_needs_volume_and_type() {
        let err = AddLogic::build_details(Category::MilkFeed, Some(100.0), None, None, None)
            .unwrap_err();
        assert!(matches!(err, AppError::MissingField { field: "--milk", .. }));

        let details = AddLogic::build_details(
            Category::MilkFeed,
            Some(100.0),
            Some(MilkType::Puramino),
            None,
            None,
        )
        .unwrap();
        assert_eq!(
            details,
            CareDetails::MilkFeed {
                volume_ml: 100.0,
                milk: MilkType::Puramino
            }
        );
    }

    #[test]
    fn bag_change_takes_no_payload() {
        let err = AddLogic::build_details(Category::BagChange, Some(10.0), None, None, None)
            .unwrap_err();
        assert!(matches!(err, AppError::UnexpectedField { field: "--ml", .. }));

        let details =
            AddLogic::build_details(Category::BagChange, None, None, None, None).unwrap();
        assert_eq!(details, CareDetails::BagChange);
    }

    #[test]
    fn bowel_movement_needs_the_flag() {
        let err =
            AddLogic::build_details(Category::BowelMovement, None, None, None, None).unwrap_err();
        assert!(matches!(err, AppError::MissingField { field: "--bm", .. }));
    }
}

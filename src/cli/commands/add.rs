use crate::cli::parser::Commands;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::event::CareEvent;
use crate::models::milk::MilkType;
use crate::utils::num::parse_decimal;
use crate::utils::time::{parse_time, resolve_now};
use crate::utils::date;

/// Record a care event.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        time: time_str,
        category,
        volume,
        milk,
        minutes,
        bowel,
    } = cmd
    {
        //
        // 1. Parse date and time (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let t = parse_time(time_str).ok_or_else(|| AppError::InvalidTime(time_str.to_string()))?;

        //
        // 2. Parse category (closed set)
        //
        let cat = Category::from_cli_str(category).ok_or_else(|| {
            AppError::InvalidCategory(format!(
                "'{}'. Use one of: milk-feed, breast-feed, stoma-bridge, bowel-movement, reservoir-empty, bag-change, pumping",
                category
            ))
        })?;

        //
        // 3. Parse the optional payload fields
        //
        let volume_ml = parse_optional_decimal(volume.as_ref())?;
        let minutes_v = parse_optional_decimal(minutes.as_ref())?;

        let milk_type = match milk {
            Some(m) => Some(MilkType::from_cli_str(m).ok_or_else(|| {
                AppError::InvalidMilkType(format!(
                    "'{}'. Use one of: maternal, puramino, nutramigen",
                    m
                ))
            })?),
            None => None,
        };

        let bowel_flag = match bowel {
            Some(b) => Some(
                crate::utils::num::parse_flag(b)
                    .ok_or_else(|| AppError::InvalidFlag(b.to_string()))?,
            ),
            None => None,
        };

        //
        // 4. Assemble the tagged record
        //
        let details = AddLogic::build_details(cat, volume_ml, milk_type, minutes_v, bowel_flag)?;
        let ev = CareEvent::new(d, t, details);

        //
        // 5. Open DB and apply
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let now = resolve_now(cfg, None)?;

        AddLogic::apply(&mut pool, &ev, now)?;
    }

    Ok(())
}

fn parse_optional_decimal(input: Option<&String>) -> AppResult<Option<f64>> {
    match input {
        Some(s) => {
            let v = parse_decimal(s).ok_or_else(|| AppError::InvalidNumber(s.to_string()))?;
            if v < 0.0 {
                return Err(AppError::InvalidNumber(s.to_string()));
            }
            Ok(Some(v))
        }
        None => Ok(None),
    }
}

use crate::cli::parser::Commands;
use crate::core::parse;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use crate::utils::table::Table;

/// List recorded events.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::List { period, category } = cmd {
        let cat_filter = match category {
            Some(c) => Some(Category::from_cli_str(c).ok_or_else(|| {
                AppError::InvalidCategory(format!("'{}' is not a known category", c))
            })?),
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;

        let rows = match period {
            None => queries::load_all(&mut pool)?,
            Some(p) if p.eq_ignore_ascii_case("all") => queries::load_all(&mut pool)?,
            Some(p) => {
                let (start, end) = parse_period(p)?;
                queries::load_by_date_range(&mut pool, start, end)?
            }
        };

        if rows.is_empty() {
            println!("⚠️  No recorded events found");
            return Ok(());
        }

        let parsed = parse::parse_rows(&rows);
        for w in &parsed.warnings {
            warning(w);
        }

        let mut table = Table::new(&["ID", "Date", "Time", "Category", "Details", "Src"]);
        for ev in &parsed.events {
            if let Some(cat) = cat_filter {
                if ev.category() != cat {
                    continue;
                }
            }
            table.add_row(vec![
                ev.id.to_string(),
                ev.date_str(),
                ev.time_str(),
                ev.category().label().to_string(),
                ev.details.summary(),
                ev.source.clone(),
            ]);
        }

        if table.is_empty() {
            println!("⚠️  No events match the given filters");
            return Ok(());
        }

        println!("📅 Recorded events:\n");
        print!("{}", table.render());
    }

    Ok(())
}

use crate::cli::parser::{Commands, TrendMetric};
use crate::core::parse;
use crate::core::trends::{self, TrendPoint};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::table::Table;
use crate::utils::time::resolve_now;

/// Show daily totals with the trailing 7-day moving average.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Trends { metric, days, at } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let rows = queries::load_all(&mut pool)?;
        if rows.is_empty() {
            warning("No events recorded yet. Use 'carelog add' to log the first one.");
            return Ok(());
        }

        let parsed = parse::parse_rows(&rows);
        for w in &parsed.warnings {
            warning(w);
        }

        // Future rows would put phantom days at the end of the series.
        let now = resolve_now(cfg, at.as_deref())?;
        let events: Vec<_> = parsed
            .events
            .into_iter()
            .filter(|ev| ev.timestamp() <= now)
            .collect();

        if events.is_empty() {
            warning("All recorded events lie in the future; nothing to chart yet.");
            return Ok(());
        }

        let series = trends::daily_series(&events, &cfg.kcal_per_ml);
        let mut points = trends::with_sma(&series);

        if let Some(n) = days {
            if points.len() > *n {
                points = points.split_off(points.len() - n);
            }
        }

        render(&points, *metric);
    }

    Ok(())
}

fn render(points: &[TrendPoint], metric: Option<TrendMetric>) {
    let show = |m: TrendMetric| metric.is_none() || metric == Some(m);

    let mut headers: Vec<&str> = vec!["Date"];
    if show(TrendMetric::Calories) {
        headers.extend(["Kcal", "Kcal 7d"]);
    }
    if show(TrendMetric::Pumped) {
        headers.extend(["Pumped ml", "Pumped 7d"]);
    }
    if show(TrendMetric::MaternalPct) {
        headers.extend(["Maternal %", "Maternal 7d"]);
    }

    let mut table = Table::new(&headers);

    for p in points {
        let mut row = vec![p.date.format("%Y-%m-%d").to_string()];
        if show(TrendMetric::Calories) {
            row.push(format!("{:.0}", p.day.calories_kcal));
            row.push(sma_cell(p.calories_sma));
        }
        if show(TrendMetric::Pumped) {
            row.push(format!("{:.0}", p.day.pumped_ml));
            row.push(sma_cell(p.pumped_sma));
        }
        if show(TrendMetric::MaternalPct) {
            row.push(format!("{:.0}", p.day.maternal_pct));
            row.push(sma_cell(p.maternal_pct_sma));
        }
        table.add_row(row);
    }

    println!("📈 Daily totals (7-day moving average):\n");
    print!("{}", table.render());
}

fn sma_cell(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("{:.1}", x),
        None => "--".to_string(),
    }
}

use crate::config::Config;
use crate::core::aggregate::{self, Snapshot};
use crate::core::aggregate::window::Window;
use crate::core::parse;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::format_elapsed;
use crate::utils::num::format_decimal;
use crate::utils::time::resolve_now;
use chrono::NaiveDateTime;

/// High-level logic for the `status` command: load the full record set,
/// type it, aggregate it at the reference instant, render.
pub struct StatusLogic;

impl StatusLogic {
    pub fn run(
        pool: &mut DbPool,
        cfg: &Config,
        today_mode: bool,
        at: Option<&str>,
    ) -> AppResult<()> {
        let rows = queries::load_all(pool)?;

        // An empty store is a valid state, not an error.
        if rows.is_empty() {
            warning("No events recorded yet. Use 'carelog add' to log the first one.");
            return Ok(());
        }

        let parsed = parse::parse_rows(&rows);
        for w in &parsed.warnings {
            warning(w);
        }

        let now = resolve_now(cfg, at)?;
        let window = if today_mode {
            Window::CalendarDay
        } else {
            Window::Trailing24h
        };

        let snap = aggregate::compute(&parsed.events, now, window, &cfg.policy());
        for w in &snap.future {
            warning(w);
        }

        render(&snap);
        Ok(())
    }
}

fn render(snap: &Snapshot) {
    println!(
        "📊 Care summary, {} (at {})",
        snap.window.label(),
        snap.now.format("%Y-%m-%d %H:%M")
    );
    println!();

    println!(
        "🍼 Milk taken:          {} ml   ({:.0}% maternal)",
        format_decimal(snap.feeding.milk_volume_ml),
        snap.feeding.maternal_pct
    );
    println!(
        "🔥 Calories:            {:.0} kcal",
        snap.feeding.calories_kcal
    );
    println!(
        "🤱 Breastfeeding:       {} min",
        format_decimal(snap.feeding.breastfeeding_min)
    );
    println!(
        "⏱️  Last feed:           {}",
        elapsed_or_none(snap.feeding.last_feed, snap.now)
    );
    println!();

    println!(
        "💧 Bridged volume:      {} ml   ({} bridges)",
        format_decimal(snap.stoma.bridged_volume_ml),
        snap.stoma.bridge_count
    );
    println!("🚼 Bowel movements:     {}", snap.stoma.bowel_count);
    println!(
        "🫙 Last emptying:       {}",
        elapsed_or_none(snap.stoma.last_reservoir_empty, snap.now)
    );
    println!(
        "🩹 Last bag change:     {}",
        elapsed_or_none(snap.stoma.last_bag_change, snap.now)
    );
    println!();

    println!(
        "🥛 Pumped:              {} ml   ({} sessions)",
        format_decimal(snap.pumping.pumped_volume_ml),
        snap.pumping.session_count
    );
    println!(
        "⏲️  Last session today:  {}",
        elapsed_or_none(snap.pumping.last_session_today, snap.now)
    );
}

fn elapsed_or_none(ts: Option<NaiveDateTime>, now: NaiveDateTime) -> String {
    match ts {
        Some(t) => format!("{} ago", format_elapsed(now - t)),
        None => colorize_optional("none recorded"),
    }
}

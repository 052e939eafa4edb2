use crate::db::models::RawEventRow;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::category::Category;
use crate::models::event::{CareDetails, CareEvent};
use crate::utils::num::format_decimal;
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

/// Load the full record set in insertion order. An empty table is a valid
/// state and simply yields an empty vector.
pub fn load_all(pool: &mut DbPool) -> AppResult<Vec<RawEventRow>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, date, time, category, milk_volume_ml, milk_type,
                bridged_volume_ml, bowel_movement, pumped_volume_ml,
                breastfeeding_min, source, created_at
         FROM events
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load rows whose date column falls within the inclusive bounds.
/// Dates are ISO strings, so text BETWEEN is date order.
pub fn load_by_date_range(
    pool: &mut DbPool,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<RawEventRow>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, date, time, category, milk_volume_ml, milk_type,
                bridged_volume_ml, bowel_movement, pumped_volume_ml,
                breastfeeding_min, source, created_at
         FROM events
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<RawEventRow> {
    Ok(RawEventRow {
        id: row.get("id")?,
        date: row.get("date")?,
        time: row.get("time")?,
        category: row.get("category")?,
        milk_volume_ml: row.get("milk_volume_ml")?,
        milk_type: row.get("milk_type")?,
        bridged_volume_ml: row.get("bridged_volume_ml")?,
        bowel_movement: row.get("bowel_movement")?,
        pumped_volume_ml: row.get("pumped_volume_ml")?,
        breastfeeding_min: row.get("breastfeeding_min")?,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

/// Append one event. The tagged payload is flattened into the category's
/// columns; everything else stays empty. Returns the assigned row id.
pub fn insert_event(conn: &Connection, ev: &CareEvent) -> AppResult<i64> {
    let mut milk_volume = String::new();
    let mut milk_type = String::new();
    let mut bridged = String::new();
    let mut bowel = String::new();
    let mut pumped = String::new();
    let mut breastfeeding = String::new();

    match &ev.details {
        CareDetails::MilkFeed { volume_ml, milk } => {
            milk_volume = format_decimal(*volume_ml);
            milk_type = milk.to_db_str().to_string();
        }
        CareDetails::BreastFeed { duration_min } => {
            breastfeeding = format_decimal(*duration_min);
        }
        CareDetails::StomaBridge { volume_ml } => {
            bridged = format_decimal(*volume_ml);
        }
        CareDetails::BowelMovement { occurred } => {
            bowel = if *occurred { "yes" } else { "no" }.to_string();
        }
        CareDetails::ReservoirEmpty | CareDetails::BagChange => {}
        CareDetails::Pumping { volume_ml } => {
            pumped = format_decimal(*volume_ml);
        }
    }

    conn.execute(
        "INSERT INTO events (date, time, category, milk_volume_ml, milk_type,
                             bridged_volume_ml, bowel_movement, pumped_volume_ml,
                             breastfeeding_min, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            ev.date_str(),
            ev.time_str(),
            ev.category().to_db_str(),
            milk_volume,
            milk_type,
            bridged,
            bowel,
            pumped,
            breastfeeding,
            ev.source,
            ev.created_at,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Count rows carrying a category string outside the recognized set.
/// Those rows are quarantined at read time; `db --check` surfaces them.
pub fn count_unknown_categories(conn: &Connection) -> AppResult<i64> {
    let placeholders = vec!["?"; Category::ALL.len()].join(",");
    let sql = format!(
        "SELECT COUNT(*) FROM events WHERE category NOT IN ({})",
        placeholders
    );

    let known: Vec<&str> = Category::ALL.iter().map(|c| c.to_db_str()).collect();
    let params_vec: Vec<&dyn rusqlite::ToSql> =
        known.iter().map(|s| s as &dyn rusqlite::ToSql).collect();

    let mut stmt = conn.prepare(&sql)?;
    let count = stmt.query_row(rusqlite::params_from_iter(params_vec), |row| row.get(0))?;
    Ok(count)
}

use crate::db::log::ttlog;
use crate::ui::messages::warning;
use rusqlite::{Connection, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `events` table with the modern schema. The column migrations
/// below retrofit the trailing columns onto databases created before they
/// existed, so a reader never has to care what was present on disk.
fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            date              TEXT NOT NULL,
            time              TEXT NOT NULL,
            category          TEXT NOT NULL,
            milk_volume_ml    TEXT NOT NULL DEFAULT '',
            milk_type         TEXT NOT NULL DEFAULT '',
            bridged_volume_ml TEXT NOT NULL DEFAULT '',
            bowel_movement    TEXT NOT NULL DEFAULT '',
            pumped_volume_ml  TEXT NOT NULL DEFAULT '',
            breastfeeding_min TEXT NOT NULL DEFAULT '',
            source            TEXT NOT NULL DEFAULT 'cli',
            created_at        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_date_time ON events(date, time);
        CREATE INDEX IF NOT EXISTS idx_events_category ON events(category);
        "#,
    )?;
    Ok(())
}

/// Check if the `events` table has the given column.
fn events_has_column(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('events')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == name {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Add a trailing text column if an older schema lacks it.
fn migrate_add_column(conn: &Connection, column: &str, version: &str) -> Result<()> {
    if events_has_column(conn, column)? {
        return Ok(()); // already present → OK
    }

    warning(format!("Adding '{}' column to events table...", column));

    conn.execute_batch(&format!(
        "ALTER TABLE events ADD COLUMN {} TEXT NOT NULL DEFAULT '';",
        column
    ))?;

    if let Err(e) = ttlog(
        conn,
        "migration_applied",
        version,
        &format!("Added column {} to events", column),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    Ok(())
}

/// Run all pending schema migrations, oldest first.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_events_table(conn)?;

    // Pumping arrived when mom started expressing milk for night feeds.
    migrate_add_column(conn, "pumped_volume_ml", "0002_add_pumped_volume")?;

    // Direct breastfeeding sessions were tracked as a duration, not a volume.
    migrate_add_column(conn, "breastfeeding_min", "0003_add_breastfeeding_min")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();

        assert!(events_has_column(&conn, "pumped_volume_ml").unwrap());
        assert!(events_has_column(&conn, "breastfeeding_min").unwrap());
    }

    #[test]
    fn old_schema_gains_trailing_columns() {
        let conn = Connection::open_in_memory().unwrap();

        // First-release schema, as an old database would have it.
        conn.execute_batch(
            "CREATE TABLE events (
                id                INTEGER PRIMARY KEY AUTOINCREMENT,
                date              TEXT NOT NULL,
                time              TEXT NOT NULL,
                category          TEXT NOT NULL,
                milk_volume_ml    TEXT NOT NULL DEFAULT '',
                milk_type         TEXT NOT NULL DEFAULT '',
                bridged_volume_ml TEXT NOT NULL DEFAULT '',
                bowel_movement    TEXT NOT NULL DEFAULT '',
                source            TEXT NOT NULL DEFAULT 'cli',
                created_at        TEXT NOT NULL
            );
            INSERT INTO events (date, time, category, milk_volume_ml, milk_type, created_at)
            VALUES ('2024-01-01', '08:00', 'milk_feed', '100', 'maternal', '2024-01-01T08:00:00');",
        )
        .unwrap();

        run_pending_migrations(&conn).unwrap();

        // The old row reads back with empty trailing columns.
        let pumped: String = conn
            .query_row("SELECT pumped_volume_ml FROM events WHERE id = 1", [], |r| {
                r.get(0)
            })
            .unwrap();
        assert_eq!(pumped, "");
    }
}

// src/export/logic.rs

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EventExport;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use crate::utils::path::expand_tilde;

use crate::db::queries::{load_all, load_by_date_range};
use std::io;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the dataset.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or an expression such as:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `start:end` in any of the above formats
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(&path, force)?;

        let rows = match range {
            None => load_all(pool)?,
            Some(r) if r.eq_ignore_ascii_case("all") => load_all(pool)?,
            Some(r) => {
                let (start, end) = parse_period(r)?;
                load_by_date_range(pool, start, end)?
            }
        };

        if rows.is_empty() {
            warning("⚠️  No events found for selected range.");
            return Ok(());
        }

        let events_vec: Vec<EventExport> = rows.iter().map(EventExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&events_vec, &path)?,
            ExportFormat::Json => export_json(&events_vec, &path)?,
        }

        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            file,
            &format!(
                "Exported {} rows as {}",
                events_vec.len(),
                format.as_str()
            ),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(())
    }
}

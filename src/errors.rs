//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Store error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Store migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid milk type: {0}")]
    InvalidMilkType(String),

    #[error("Invalid numeric value: {0}")]
    InvalidNumber(String),

    #[error("Invalid yes/no value: {0}")]
    InvalidFlag(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Category '{category}' requires {field}")]
    MissingField {
        category: &'static str,
        field: &'static str,
    },

    #[error("Category '{category}' does not take {field}")]
    UnexpectedField {
        category: &'static str,
        field: &'static str,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

//! Unified application error type.
//! All modules (db, core, cli, config) return AppError so that `main`
//! has a single place where failures are reported.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid break duration: {0} (expected a non-negative number of minutes)")]
    InvalidBreak(i64),

    // ---------------------------
    // Record errors
    // ---------------------------
    #[error("No working day found for {0}")]
    NotFound(String),

    #[error("A working day for {0} already exists")]
    DuplicateDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Could not determine the home directory")]
    HomeDir,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),
}

impl AppError {
    /// True for malformed user input (date, time or break).
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_) | AppError::InvalidTime(_) | AppError::InvalidBreak(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;

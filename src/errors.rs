//! Unified application error type.
//! All modules (store, core, bot, cli) return AppError to keep the error
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
    // Storage-related
    // ---------------------------
    #[error("Storage error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No open shift found for {0}")]
    NoOpenShift(String),

    #[error("No registered name for user {0}")]
    NotRegistered(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;

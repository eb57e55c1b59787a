//! Unified application error type.
//! Model, store, controller and CLI all return AppError so that the
//! recovery policy for each kind lives in one place (the controller).

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
    // Encoding
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Session errors
    // ---------------------------
    /// Non-finite or non-positive numeric input on the session form.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The session list could not be written to the store.
    #[error("Could not save sessions: {0}")]
    Persistence(String),

    /// Stored data could not be turned back into sessions.
    #[error("Stored sessions are unreadable: {0}")]
    Reconstruction(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Current position unavailable: {0}")]
    Sensor(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

//! Unified application error type.
//! All modules (core, cli, export, config) return AppError so that the shell
//! can report any failure the same way and keep the session alive.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Domain
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("Invalid value '{value}' for {form}.{field}")]
    InvalidField {
        form: String,
        field: String,
        value: String,
    },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

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
}

impl AppError {
    pub fn invalid_field(form: &str, field: &str, value: &str) -> Self {
        AppError::InvalidField {
            form: form.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;

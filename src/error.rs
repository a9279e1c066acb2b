use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::templates;

/// Failures of the quotes table itself.
#[derive(Error, Debug)]
pub enum StorageError {
    /// `index` is the 0-based position in the inserted batch.
    #[error("quote at batch index {index} (0-based) has empty text")]
    EmptyText { index: usize },

    #[error("a quote with id {0} already exists")]
    DuplicateId(i64),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("seed data file {} does not exist", .0.display())]
    SourceMissing(PathBuf),

    #[error("seed data file {} is missing required columns: {}", .path.display(), .missing.join(", "))]
    MissingColumns {
        path: PathBuf,
        missing: Vec<&'static str>,
    },

    #[error("seed data file {} has a malformed row at line {line}: {source}", .path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("seed data file {} has a row with empty text at line {line}", .path.display())]
    EmptyText { path: PathBuf, line: u64 },

    #[error("could not read seed data file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown environment \"{0}\" (expected development, testing or production)")]
    UnknownEnvironment(String),

    #[error("{0} must be set in production")]
    MissingVar(&'static str),

    #[error("invalid value for {key}: \"{value}\"")]
    InvalidVar { key: &'static str, value: String },

    #[error("could not load settings file {}: {source}", .path.display())]
    SettingsFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Errors surfaced by HTTP handlers.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("internal error: {0}")]
    Storage(#[from] StorageError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(err = ?self, status = %status, "request failed");

        (status, Html(templates::error_page(status))).into_response()
    }
}

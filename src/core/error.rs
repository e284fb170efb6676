use thiserror::Error;

use crate::buttons::serializer::SerializeError;
use crate::buttons::store::StoreError;

/// Centralized error type for binary-level operations.
///
/// Inside an interaction, failures never reach this type: they are
/// converted into a single user-facing message at the point of occurrence.
/// `AppError` covers everything outside that path (startup, CLI).
#[derive(Error, Debug)]
pub enum AppError {
    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// HTTP client construction and transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Tree serialization errors
    #[error("Serialization error: {0}")]
    Serialize(#[from] SerializeError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

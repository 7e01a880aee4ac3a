//! Native subsystem error type.
//!
//! Suite subsystems signal failures with an `AppError` carrying an
//! HTTP-equivalent status code. The services facade translates these into
//! its own unified error model before they reach a consumer; nothing
//! outside a subsystem boundary should match on `AppError` directly.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for subsystem ports using the status-bearing convention.
pub type AppResult<T> = Result<T, AppError>;

/// Error produced by a suite subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// Stable identifier for the failure, e.g. `app.channel.get.missing`.
    pub id: String,

    /// Human-readable description.
    pub message: String,

    /// Internal detail for diagnostics, never shown to end users.
    pub detailed_error: String,

    /// HTTP-equivalent status code attached by the owning subsystem.
    pub status_code: u16,
}

impl AppError {
    /// Create an error with an explicit status code.
    pub fn new(id: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            detailed_error: String::new(),
            status_code,
        }
    }

    /// Create a resource-absent error (404).
    pub fn not_found(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(id, message, StatusCode::NOT_FOUND.as_u16())
    }

    /// Create an internal subsystem fault (500).
    pub fn internal(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(id, message, StatusCode::INTERNAL_SERVER_ERROR.as_u16())
    }

    /// Attach internal diagnostic detail.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detailed_error = detail.into();
        self
    }

    /// Whether this error carries the resource-absent status signal.
    pub fn is_not_found(&self) -> bool {
        self.status_code == StatusCode::NOT_FOUND.as_u16()
    }
}

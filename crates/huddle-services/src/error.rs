//! Unified error model for the services facade.
//!
//! Exactly two kinds cross the facade boundary: [`PluginError::NotFound`]
//! for resource absence and [`PluginError::Other`] for everything else.
//! Consumers distinguish them by kind; nothing downstream of the facade
//! inspects subsystem status codes.

use thiserror::Error;

use huddle_core::{AppError, AppResult};

/// Error returned by facade methods.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The requested resource does not exist.
    #[error("not found")]
    NotFound,

    /// Any other subsystem failure, with the original cause preserved for
    /// diagnostics.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PluginError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PluginError::NotFound)
    }
}

/// Translate a native subsystem error into the unified model.
///
/// Pure and total: an error carrying the resource-absent status maps to the
/// shared `NotFound` kind; anything else is wrapped unchanged as `Other`.
pub fn normalize_app_err(err: AppError) -> PluginError {
    if err.is_not_found() {
        PluginError::NotFound
    } else {
        PluginError::Other(anyhow::Error::new(err))
    }
}

/// Map a status-bearing port result into the facade contract. Keeps the
/// delegating methods one line each.
pub(crate) fn normalize<T>(result: AppResult<T>) -> Result<T, PluginError> {
    result.map_err(normalize_app_err)
}

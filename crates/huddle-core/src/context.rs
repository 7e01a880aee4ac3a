//! Ambient execution scope for context-requiring subsystem calls.

use uuid::Uuid;

use crate::logger::Logger;

/// Execution scope threaded into subsystem calls that need one (post
/// creation, member creation, bot provisioning, ...).
///
/// A facade builds this once at construction with [`RequestContext::empty`]
/// and reuses it for every call. It is deliberately not request-scoped:
/// per-call actor identity travels in method arguments where the owning
/// subsystem requires it.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Correlation id for the scope, assigned at construction.
    pub request_id: String,

    /// Session the scope acts under; empty for the ambient product scope.
    pub session_id: String,

    /// Acting user; empty for the ambient product scope.
    pub user_id: String,

    logger: Logger,
}

impl RequestContext {
    /// Create the empty ambient scope carrying only a logger handle.
    pub fn empty(logger: Logger) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            session_id: String::new(),
            user_id: String::new(),
            logger,
        }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

//! Logging handle carried by the execution context.
//!
//! The suite logs through `tracing`; this handle tags every event with the
//! product that emitted it so co-located products can be told apart in one
//! shared subscriber.

/// Cloneable logging handle tagged with the owning product.
#[derive(Debug, Clone)]
pub struct Logger {
    product: String,
}

impl Logger {
    pub fn new(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
        }
    }

    /// The product name this handle is tagged with.
    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn error(&self, msg: &str) {
        tracing::error!(product = %self.product, "{msg}");
    }

    pub fn warn(&self, msg: &str) {
        tracing::warn!(product = %self.product, "{msg}");
    }

    pub fn info(&self, msg: &str) {
        tracing::info!(product = %self.product, "{msg}");
    }

    pub fn debug(&self, msg: &str) {
        tracing::debug!(product = %self.product, "{msg}");
    }
}

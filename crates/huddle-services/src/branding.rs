//! Product identity constants for the workflows feature module.
//!
//! These scope every key-value entry, cluster event, post deletion, and
//! router registration made through the facade, so co-located products
//! sharing the same underlying stores cannot collide.

/// Stable product identifier. Never change this: it is baked into persisted
/// key-value entries.
pub const WORKFLOWS_PRODUCT_ID: &str = "com.huddle.workflows";

/// Human-readable product name, used for router registration and log
/// tagging.
pub const WORKFLOWS_PRODUCT_NAME: &str = "workflows";

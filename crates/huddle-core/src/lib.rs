//! # Huddle Core Library
//!
//! Domain entities, subsystem port traits, and shared execution context for
//! the Huddle suite.
//!
//! ## Modules
//!
//! - `domain` - Platform entities (Channel, Post, User, Team, ...)
//! - `error` - Status-code-bearing native error (`AppError`)
//! - `services` - Subsystem port traits the services facade delegates to
//! - `context` - Ambient execution scope for context-requiring calls
//! - `logger` - Cloneable logging handle over `tracing`

pub mod context;
pub mod domain;
pub mod error;
pub mod logger;
pub mod services;

// Re-export commonly used types
pub use context::RequestContext;
pub use domain::*;
pub use error::{AppError, AppResult};
pub use logger::Logger;
pub use services::*;

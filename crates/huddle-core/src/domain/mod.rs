//! Platform entities and value objects
//!
//! Lean serde models for the types that cross subsystem boundaries. These
//! are owned by the subsystems; the services facade moves them around
//! unchanged.

mod bot;
mod channel;
mod cloud;
mod cluster;
mod command;
mod config;
mod dialog;
mod file_info;
mod kv;
mod license;
mod permission;
mod post;
mod preference;
mod session;
mod team;
mod user;

pub use bot::*;
pub use channel::*;
pub use cloud::*;
pub use cluster::*;
pub use command::*;
pub use config::*;
pub use dialog::*;
pub use file_info::*;
pub use kv::*;
pub use license::*;
pub use permission::*;
pub use post::*;
pub use preference::*;
pub use session::*;
pub use team::*;
pub use user::*;

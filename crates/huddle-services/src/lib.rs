//! # Huddle Services Facade
//!
//! One stable interface over the suite's subsystem ports, consumed by the
//! workflows product as its single dependency on the host platform.
//!
//! Every method is a one-line delegation into the owning subsystem; the
//! value this crate adds is the uniform contract: one error model
//! ([`PluginError`]), one namespace for key-value and cluster traffic
//! ([`WORKFLOWS_PRODUCT_ID`]), and one ambient execution scope built at
//! construction.
//!
//! ## Modules
//!
//! - `api` - The [`ServicesApi`] capability trait and its key-value
//!   retrieval extension
//! - `adapter` - [`ServiceApiAdapter`], the delegating implementation
//! - `error` - [`PluginError`] and the native-error normalizer
//! - `branding` - Product identity constants

pub mod adapter;
pub mod api;
pub mod branding;
pub mod error;

pub use adapter::{ServiceApiAdapter, SuiteServices};
pub use api::{ServicesApi, ServicesApiExt};
pub use branding::{WORKFLOWS_PRODUCT_ID, WORKFLOWS_PRODUCT_NAME};
pub use error::{normalize_app_err, PluginError};

//! Suite configuration snapshot

use serde::{Deserialize, Serialize};

/// General service settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSettings {
    pub site_url: String,
    pub enable_developer: bool,
}

/// Database settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlSettings {
    /// Driver behind the data store, e.g. `"sqlite"` or `"postgres"`.
    pub driver_name: String,
    pub data_source: String,
}

/// Snapshot of the suite configuration.
///
/// Handed out by value; mutating a snapshot has no effect on the running
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub service_settings: ServiceSettings,
    pub sql_settings: SqlSettings,
}

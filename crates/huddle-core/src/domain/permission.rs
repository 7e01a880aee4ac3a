//! Permission value object

use serde::{Deserialize, Serialize};

/// The scope a permission applies at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionScope {
    #[default]
    System,
    Team,
    Channel,
    Group,
}

/// A grantable capability, identified by a stable id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Stable identifier, e.g. `create_post`.
    pub id: String,
    pub name: String,
    pub description: String,
    pub scope: PermissionScope,
}

impl Permission {
    pub fn new(id: impl Into<String>, scope: PermissionScope) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            description: String::new(),
            scope,
        }
    }
}

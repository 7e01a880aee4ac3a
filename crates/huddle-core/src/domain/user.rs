//! User entity and directory lookup options

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A member of the suite's user directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub nickname: String,
    pub first_name: String,
    pub last_name: String,
    /// Space-separated system role names.
    pub roles: String,
    pub is_bot: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            roles: "system_user".to_string(),
            ..Default::default()
        }
    }
}

/// Filter options for profile listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGetOptions {
    pub in_team_id: Option<String>,
    pub in_channel_id: Option<String>,
    /// Restrict to users without a deactivation mark.
    pub active: bool,
    pub page: u64,
    pub per_page: u64,
}

//! Bot entity - a non-human account owned by a product or integration

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bot account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bot {
    /// Id of the backing user account; assigned by the bot subsystem.
    pub user_id: String,
    pub username: String,
    pub display_name: String,
    pub description: String,
    /// Product or plugin id that owns this bot.
    pub owner_id: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Bot {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Default::default()
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

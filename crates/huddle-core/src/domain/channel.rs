//! Channel entities, membership, and sidebar categories

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Channel visibility discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelType {
    /// Public channel, joinable by any team member.
    #[default]
    Open,
    /// Invite-only channel.
    Private,
    /// One-to-one conversation between two users.
    Direct,
    /// Ad-hoc conversation between a small set of users.
    Group,
}

/// A conversation surface inside a team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub team_id: String,
    /// URL-safe handle, unique within the team.
    pub name: String,
    pub display_name: String,
    pub channel_type: ChannelType,
    pub header: String,
    pub purpose: String,
    pub creator_id: String,
    pub created_at: Option<DateTime<Utc>>,
    /// Set when the channel has been archived.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Channel {
    pub fn new(team_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            name: name.into(),
            created_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_type(mut self, channel_type: ChannelType) -> Self {
        self.channel_type = channel_type;
        self
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// A user's membership in a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelMember {
    pub channel_id: String,
    pub user_id: String,
    /// Space-separated role names, e.g. `"channel_user channel_admin"`.
    pub roles: String,
}

/// Options accepted by channel listing lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSearchOpts {
    pub include_deleted: bool,
}

/// A user-defined sidebar grouping within a team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SidebarCategory {
    pub id: String,
    pub user_id: String,
    pub team_id: String,
    pub display_name: String,
}

/// A sidebar category together with the channels it contains, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SidebarCategoryWithChannels {
    #[serde(flatten)]
    pub category: SidebarCategory,
    pub channel_ids: Vec<String>,
}

/// All sidebar categories for a user in a team, with display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderedSidebarCategories {
    /// Category ids in display order.
    pub order: Vec<String>,
    pub categories: Vec<SidebarCategoryWithChannels>,
}

//! Team, team membership, and user-group entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A team: the top-level grouping of channels and members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    /// URL-safe handle, unique across the suite.
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A user's membership in a team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub team_id: String,
    pub user_id: String,
    /// Space-separated role names, e.g. `"team_user team_admin"`.
    pub roles: String,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Where a user group is sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupSource {
    #[default]
    Custom,
    Ldap,
}

/// A named group of users, custom or directory-synced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub source: GroupSource,
}

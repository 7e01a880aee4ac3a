//! Slash-command value objects

use serde::{Deserialize, Serialize};

/// Arguments of a slash-command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandArgs {
    pub user_id: String,
    pub channel_id: String,
    pub team_id: String,
    /// The full command line, including the leading slash.
    pub command: String,
    pub trigger_id: String,
}

/// Response rendered after executing a slash command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    /// `"in_channel"` or `"ephemeral"`.
    pub response_type: String,
    pub text: String,
}

//! Cloud workspace limits

use serde::{Deserialize, Serialize};

/// Message-history limits for a cloud workspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLimits {
    /// Maximum retained message history, if capped.
    pub history: Option<i64>,
}

/// File-storage limits for a cloud workspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLimits {
    /// Total storage in bytes, if capped.
    pub total_storage: Option<i64>,
}

/// Product limits reported by the cloud subsystem.
///
/// Absent sections mean the corresponding dimension is uncapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLimits {
    pub messages: Option<MessageLimits>,
    pub files: Option<FileLimits>,
}

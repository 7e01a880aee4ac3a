//! File metadata entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for a file held by the file store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    pub id: String,
    pub creator_id: String,
    /// Post the file is attached to; empty while an upload is pending.
    pub post_id: String,
    pub name: String,
    pub extension: String,
    pub size: i64,
    pub mime_type: String,
    pub created_at: Option<DateTime<Utc>>,
}

//! License entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The license installed on this deployment, if any.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub id: String,
    /// Edition short name, e.g. `"professional"` or `"enterprise"`.
    pub sku_short_name: String,
    pub is_trial: bool,
    pub starts_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl License {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expiry| expiry < now)
    }
}

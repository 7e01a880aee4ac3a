//! Key-value store write options

use serde::{Deserialize, Serialize};

/// Options for a key-value write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KvSetOptions {
    /// Compare-and-set: only write if the current value equals `old_value`.
    pub atomic: bool,
    /// Expected current value for an atomic write; `None` means "absent".
    pub old_value: Option<Vec<u8>>,
    /// Expiry in seconds; zero means the entry never expires.
    pub expire_in_seconds: i64,
}

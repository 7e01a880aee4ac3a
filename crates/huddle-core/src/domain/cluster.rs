//! Cluster broadcast value objects

use serde::{Deserialize, Serialize};

/// Targeting for a websocket event broadcast.
///
/// All fields empty means "every connected client".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsocketBroadcast {
    pub user_id: Option<String>,
    pub channel_id: Option<String>,
    pub team_id: Option<String>,
    /// Connection user ids to skip even when otherwise targeted.
    pub omit_users: Vec<String>,
}

/// Delivery guarantee for an inter-node cluster event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterSendType {
    /// Delivered through the reliable transport; may block on backpressure.
    Reliable,
    #[default]
    BestEffort,
}

/// An opaque event relayed to the other nodes of the cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterEvent {
    /// Event discriminator, scoped by the sending product.
    pub id: String,
    pub data: Vec<u8>,
}

/// Send options for a cluster event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterEventSendOptions {
    pub send_type: ClusterSendType,
    /// Specific node to address; `None` broadcasts to all nodes.
    pub target_id: Option<String>,
}

//! Subsystem port traits for the suite services facade
//!
//! Each trait is one host capability domain (channels, posts, users, ...).
//! Implementations live with the owning subsystem; the facade only holds
//! `Arc<dyn ...>` references, set once at construction.
//!
//! Two error conventions exist across the suite and are preserved here:
//! most ports return [`AppResult`] (an `AppError` carrying an
//! HTTP-equivalent status code), while the bot, cloud, cluster-event, and
//! session ports return plain `anyhow::Result`. The facade normalizes both
//! into its unified error model.

use async_trait::async_trait;
use axum::Router;
use serde_json::{Map, Value};

use crate::context::RequestContext;
use crate::domain::{
    Bot, Channel, ChannelMember, ChannelSearchOpts, ClusterEvent, ClusterEventSendOptions, Config,
    FileInfo, Group, KvSetOptions, License, OrderedSidebarCategories, Permission, Post, Preferences,
    ProductLimits, Session, SidebarCategoryWithChannels, Team, TeamMember, User, UserGetOptions,
    WebsocketBroadcast,
};
use crate::error::AppResult;

/// Channel subsystem port.
#[async_trait]
pub trait ChannelService: Send + Sync {
    /// Get (or create) the direct channel between two users.
    async fn get_direct_channel(&self, user_id1: &str, user_id2: &str) -> AppResult<Channel>;

    /// Get a channel by id.
    async fn get_channel_by_id(&self, channel_id: &str) -> AppResult<Channel>;

    /// Get a user's membership in a channel.
    async fn get_channel_member(&self, channel_id: &str, user_id: &str)
        -> AppResult<ChannelMember>;

    /// List the channels of a team visible to a user.
    async fn get_channels_for_team_for_user(
        &self,
        team_id: &str,
        user_id: &str,
        opts: &ChannelSearchOpts,
    ) -> AppResult<Vec<Channel>>;

    /// Get a user's sidebar categories for a team, in display order.
    async fn get_channel_sidebar_categories(
        &self,
        user_id: &str,
        team_id: &str,
    ) -> AppResult<OrderedSidebarCategories>;

    /// Page through the members of a channel.
    async fn get_channel_members(
        &self,
        channel_id: &str,
        page: u64,
        per_page: u64,
    ) -> AppResult<Vec<ChannelMember>>;

    /// Create a sidebar category for a user in a team.
    async fn create_channel_sidebar_category(
        &self,
        user_id: &str,
        team_id: &str,
        category: &SidebarCategoryWithChannels,
    ) -> AppResult<SidebarCategoryWithChannels>;

    /// Replace a user's sidebar categories in a team.
    async fn update_channel_sidebar_categories(
        &self,
        user_id: &str,
        team_id: &str,
        categories: &[SidebarCategoryWithChannels],
    ) -> AppResult<Vec<SidebarCategoryWithChannels>>;

    /// Create a channel.
    async fn create_channel(&self, channel: &Channel) -> AppResult<Channel>;

    /// Add a user to a channel as the system.
    async fn add_channel_member(&self, channel_id: &str, user_id: &str)
        -> AppResult<ChannelMember>;

    /// Add a user to a channel on behalf of `as_user_id`.
    async fn add_user_to_channel(
        &self,
        channel_id: &str,
        user_id: &str,
        as_user_id: &str,
    ) -> AppResult<ChannelMember>;

    /// Replace a channel member's roles.
    async fn update_channel_member_roles(
        &self,
        channel_id: &str,
        user_id: &str,
        new_roles: &str,
    ) -> AppResult<ChannelMember>;

    /// Remove a user from a channel.
    async fn delete_channel_member(&self, channel_id: &str, user_id: &str) -> AppResult<()>;
}

/// Post subsystem port.
#[async_trait]
pub trait PostService: Send + Sync {
    async fn create_post(&self, ctx: &RequestContext, post: &Post) -> AppResult<Post>;

    /// Fetch posts by id. The second value is the first-inaccessible-post
    /// timestamp reported by cloud-limit enforcement.
    async fn get_posts_by_ids(&self, post_ids: &[String]) -> AppResult<(Vec<Post>, i64)>;

    /// Deliver a post visible only to `user_id`. Has no failure channel;
    /// the returned post is the delivered rendition.
    async fn send_ephemeral_post(&self, ctx: &RequestContext, user_id: &str, post: &Post) -> Post;

    async fn get_post(&self, post_id: &str) -> AppResult<Post>;

    /// Delete a post, attributing the deletion to `delete_by_id`.
    async fn delete_post(
        &self,
        ctx: &RequestContext,
        post_id: &str,
        delete_by_id: &str,
    ) -> AppResult<Post>;

    /// Update a post. With `safe_update` the subsystem refuses edits that
    /// would drop another writer's changes.
    async fn update_post(
        &self,
        ctx: &RequestContext,
        post: &Post,
        safe_update: bool,
    ) -> AppResult<Post>;
}

/// User directory port.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_user(&self, user_id: &str) -> AppResult<User>;

    async fn get_user_by_username(&self, name: &str) -> AppResult<User>;

    async fn get_user_by_email(&self, email: &str) -> AppResult<User>;

    async fn update_user(
        &self,
        ctx: &RequestContext,
        user: &User,
        send_notifications: bool,
    ) -> AppResult<User>;

    /// List user profiles matching the given filter.
    async fn get_users_from_profiles(&self, options: &UserGetOptions) -> AppResult<Vec<User>>;
}

/// Team subsystem port. Also fronts the user-group directory.
#[async_trait]
pub trait TeamService: Send + Sync {
    async fn get_member(&self, team_id: &str, user_id: &str) -> AppResult<TeamMember>;

    async fn create_member(
        &self,
        ctx: &RequestContext,
        team_id: &str,
        user_id: &str,
    ) -> AppResult<TeamMember>;

    async fn get_group(&self, group_id: &str) -> AppResult<Group>;

    async fn get_team(&self, team_id: &str) -> AppResult<Team>;

    /// Page through the users of a group.
    async fn get_group_member_users(
        &self,
        group_id: &str,
        page: u64,
        per_page: u64,
    ) -> AppResult<Vec<User>>;
}

/// Permission evaluator port.
///
/// Checks report their own faults through the error channel; the facade is
/// what turns a fault into a denied check.
#[async_trait]
pub trait PermissionService: Send + Sync {
    async fn has_permission_to(&self, user_id: &str, permission: &Permission) -> AppResult<bool>;

    async fn has_permission_to_team(
        &self,
        user_id: &str,
        team_id: &str,
        permission: &Permission,
    ) -> AppResult<bool>;

    async fn has_permission_to_channel(
        &self,
        asking_user_id: &str,
        channel_id: &str,
        permission: &Permission,
    ) -> AppResult<bool>;

    async fn roles_grant_permission(
        &self,
        role_names: &[String],
        permission_id: &str,
    ) -> AppResult<bool>;
}

/// Bot provisioning port. Plain error convention.
#[async_trait]
pub trait BotService: Send + Sync {
    /// Create the bot if missing, reclaim it if orphaned, and return the id
    /// of its backing user account.
    async fn ensure_bot(
        &self,
        ctx: &RequestContext,
        product_id: &str,
        bot: &Bot,
    ) -> anyhow::Result<String>;
}

/// License port.
pub trait LicenseService: Send + Sync {
    /// The installed license, or `None` for unlicensed deployments.
    fn license(&self) -> Option<License>;
}

/// File metadata port.
#[async_trait]
pub trait FileInfoService: Send + Sync {
    async fn get_file_info(&self, file_id: &str) -> AppResult<FileInfo>;
}

/// Cluster broadcast port. Plain error convention.
#[async_trait]
pub trait ClusterService: Send + Sync {
    /// Broadcast a websocket event to connected clients, scoped by product.
    async fn publish_web_socket_event(
        &self,
        product_id: &str,
        event: &str,
        payload: &Map<String, Value>,
        broadcast: &WebsocketBroadcast,
    );

    /// Relay an event to the other nodes of the cluster.
    async fn publish_cluster_event(
        &self,
        product_id: &str,
        event: ClusterEvent,
        opts: ClusterEventSendOptions,
    ) -> anyhow::Result<()>;
}

/// Cloud limits port. Plain error convention.
#[async_trait]
pub trait CloudService: Send + Sync {
    /// Limits for the current workspace; `None` for self-hosted
    /// deployments.
    async fn cloud_limits(&self) -> anyhow::Result<Option<ProductLimits>>;
}

/// Configuration port.
pub trait ConfigService: Send + Sync {
    /// Snapshot of the current configuration.
    fn config(&self) -> Config;
}

/// Key-value persistence port. Every operation is scoped by the calling
/// product's id so co-located products cannot collide.
#[async_trait]
pub trait KvStoreService: Send + Sync {
    /// Write a value. Returns `false` when an atomic write lost its race.
    async fn set_with_options(
        &self,
        product_id: &str,
        key: &str,
        value: &[u8],
        options: &KvSetOptions,
    ) -> AppResult<bool>;

    /// Read a value. An absent key yields an empty byte vector.
    async fn get(&self, product_id: &str, key: &str) -> AppResult<Vec<u8>>;

    async fn delete(&self, product_id: &str, key: &str) -> AppResult<()>;

    /// Page through the keys of the product's namespace.
    async fn list(&self, product_id: &str, page: u64, per_page: u64) -> AppResult<Vec<String>>;
}

/// System diagnostics port.
pub trait SystemService: Send + Sync {
    /// Stable anonymous id for this deployment.
    fn diagnostic_id(&self) -> String;
}

/// HTTP router registry port.
pub trait RouterService: Send + Sync {
    /// Mount a product's sub-router under its product name.
    fn register_router(&self, product_name: &str, sub: Router);
}

/// User preference port.
#[async_trait]
pub trait PreferenceService: Send + Sync {
    async fn get_preferences_for_user(&self, user_id: &str) -> AppResult<Preferences>;

    async fn update_preferences_for_user(
        &self,
        user_id: &str,
        preferences: &Preferences,
    ) -> AppResult<()>;

    async fn delete_preferences_for_user(
        &self,
        user_id: &str,
        preferences: &Preferences,
    ) -> AppResult<()>;
}

/// Session lookup port. Plain error convention.
#[async_trait]
pub trait SessionService: Send + Sync {
    async fn get_session(&self, session_id: &str) -> anyhow::Result<Session>;
}

//! The capability interface the workflows product consumes.
//!
//! [`ServicesApi`] enumerates every suite operation the product depends on,
//! grouped by subsystem. All methods share one contract: pass-through
//! inputs, subsystem-native results, and a [`PluginError`] on failure,
//! with three documented exceptions:
//!
//! - the boolean permission checks have no error channel and fail closed;
//! - [`send_ephemeral_post`](ServicesApi::send_ephemeral_post) overwrites
//!   the caller's post and signals nothing;
//! - [`open_interactive_dialog`](ServicesApi::open_interactive_dialog) and
//!   [`execute`](ServicesApi::execute) are stubs returning no-op success.
//!
//! [`ServicesApiExt`] adds the generic key-value retrieval with decode on
//! top of [`kv_get`](ServicesApi::kv_get); it is blanket-implemented for
//! every `ServicesApi`.

use async_trait::async_trait;
use axum::Router;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use huddle_core::{
    Bot, Channel, ChannelMember, ClusterEvent, ClusterEventSendOptions, CommandArgs,
    CommandResponse, Config, FileInfo, Group, KvSetOptions, License, Logger, OpenDialogRequest,
    OrderedSidebarCategories, Permission, Post, Preferences, ProductLimits, Session,
    SidebarCategoryWithChannels, Team, TeamMember, User, UserGetOptions, WebsocketBroadcast,
};
use huddle_storage::SharedDatabase;

use crate::error::PluginError;

/// Everything the workflows product needs from the host suite.
#[async_trait]
pub trait ServicesApi: Send + Sync {
    //
    // Channels
    //

    /// Get (or create) the direct channel between two users.
    async fn get_direct_channel(
        &self,
        user_id1: &str,
        user_id2: &str,
    ) -> Result<Channel, PluginError>;

    async fn get_channel_by_id(&self, channel_id: &str) -> Result<Channel, PluginError>;

    async fn get_channel_member(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> Result<ChannelMember, PluginError>;

    async fn get_channels_for_team_for_user(
        &self,
        team_id: &str,
        user_id: &str,
        include_deleted: bool,
    ) -> Result<Vec<Channel>, PluginError>;

    async fn get_channel_sidebar_categories(
        &self,
        user_id: &str,
        team_id: &str,
    ) -> Result<OrderedSidebarCategories, PluginError>;

    async fn get_channel_members(
        &self,
        channel_id: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<ChannelMember>, PluginError>;

    async fn create_channel_sidebar_category(
        &self,
        user_id: &str,
        team_id: &str,
        category: &SidebarCategoryWithChannels,
    ) -> Result<SidebarCategoryWithChannels, PluginError>;

    async fn update_channel_sidebar_categories(
        &self,
        user_id: &str,
        team_id: &str,
        categories: &[SidebarCategoryWithChannels],
    ) -> Result<Vec<SidebarCategoryWithChannels>, PluginError>;

    async fn create_channel(&self, channel: &Channel) -> Result<Channel, PluginError>;

    async fn add_member_to_channel(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> Result<ChannelMember, PluginError>;

    async fn add_user_to_channel(
        &self,
        channel_id: &str,
        user_id: &str,
        as_user_id: &str,
    ) -> Result<ChannelMember, PluginError>;

    async fn update_channel_member_roles(
        &self,
        channel_id: &str,
        user_id: &str,
        new_roles: &str,
    ) -> Result<ChannelMember, PluginError>;

    async fn delete_channel_member(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> Result<(), PluginError>;

    /// Alias of [`add_member_to_channel`](Self::add_member_to_channel),
    /// kept for older call sites.
    async fn add_channel_member(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> Result<ChannelMember, PluginError>;

    //
    // Posts
    //

    async fn create_post(&self, post: &Post) -> Result<Post, PluginError>;

    async fn get_posts_by_ids(&self, post_ids: &[String]) -> Result<Vec<Post>, PluginError>;

    /// Deliver a post visible only to `user_id`.
    ///
    /// Fire-and-forget: the caller's `post` is overwritten with the
    /// delivered rendition and no failure is ever reported. All other
    /// post-producing methods return a new value with an error channel;
    /// this asymmetry is part of the contract.
    async fn send_ephemeral_post(&self, user_id: &str, post: &mut Post);

    async fn get_post(&self, post_id: &str) -> Result<Post, PluginError>;

    async fn delete_post(&self, post_id: &str) -> Result<Post, PluginError>;

    async fn update_post(&self, post: &Post) -> Result<Post, PluginError>;

    //
    // Users
    //

    async fn get_user_by_id(&self, user_id: &str) -> Result<User, PluginError>;

    async fn get_user_by_username(&self, name: &str) -> Result<User, PluginError>;

    async fn get_user_by_email(&self, email: &str) -> Result<User, PluginError>;

    async fn update_user(&self, user: &User) -> Result<User, PluginError>;

    async fn get_users_from_profiles(
        &self,
        options: &UserGetOptions,
    ) -> Result<Vec<User>, PluginError>;

    //
    // Teams
    //

    async fn get_team_member(
        &self,
        team_id: &str,
        user_id: &str,
    ) -> Result<TeamMember, PluginError>;

    async fn create_member(&self, team_id: &str, user_id: &str)
        -> Result<TeamMember, PluginError>;

    async fn get_group(&self, group_id: &str) -> Result<Group, PluginError>;

    async fn get_team(&self, team_id: &str) -> Result<Team, PluginError>;

    async fn get_group_member_users(
        &self,
        group_id: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<User>, PluginError>;

    //
    // Permissions
    //
    // No error channel by design: an evaluator fault presents as `false`.
    // Authorization fails closed.
    //

    async fn has_permission_to(&self, user_id: &str, permission: &Permission) -> bool;

    async fn has_permission_to_team(
        &self,
        user_id: &str,
        team_id: &str,
        permission: &Permission,
    ) -> bool;

    async fn has_permission_to_channel(
        &self,
        asking_user_id: &str,
        channel_id: &str,
        permission: &Permission,
    ) -> bool;

    async fn roles_grant_permission(&self, role_names: &[String], permission_id: &str) -> bool;

    //
    // Bots
    //

    /// Ensure the product's bot exists and return its user id.
    async fn ensure_bot(&self, bot: &Bot) -> Result<String, PluginError>;

    //
    // License
    //

    fn get_license(&self) -> Option<License>;

    //
    // Files
    //

    async fn get_file_info(&self, file_id: &str) -> Result<FileInfo, PluginError>;

    //
    // Cluster
    //

    async fn publish_web_socket_event(
        &self,
        event: &str,
        payload: &Map<String, Value>,
        broadcast: &WebsocketBroadcast,
    );

    async fn publish_cluster_event(
        &self,
        event: ClusterEvent,
        opts: ClusterEventSendOptions,
    ) -> Result<(), PluginError>;

    //
    // Cloud
    //

    async fn get_cloud_limits(&self) -> Result<Option<ProductLimits>, PluginError>;

    //
    // Config
    //

    fn get_config(&self) -> Config;

    //
    // Logging
    //

    /// The product-tagged logging handle shared by every call.
    fn logger(&self) -> Logger;

    //
    // Key-value store (namespaced by the product id)
    //

    /// Write a value. Returns `false` when an atomic write lost its race.
    async fn kv_set_with_options(
        &self,
        key: &str,
        value: &[u8],
        options: &KvSetOptions,
    ) -> Result<bool, PluginError>;

    /// Read raw bytes. An absent key yields an empty vector, not an error.
    async fn kv_get(&self, key: &str) -> Result<Vec<u8>, PluginError>;

    async fn kv_delete(&self, key: &str) -> Result<(), PluginError>;

    async fn kv_list(&self, page: u64, per_page: u64) -> Result<Vec<String>, PluginError>;

    //
    // Data store
    //

    /// The master database handle. Lifecycle stays with the data-store
    /// subsystem; the facade does no pooling or transaction scoping.
    fn get_master_db(&self) -> Result<SharedDatabase, PluginError>;

    /// Driver name behind the data store, from the running configuration.
    fn driver_name(&self) -> String;

    //
    // System
    //

    fn get_diagnostic_id(&self) -> String;

    //
    // Router
    //

    /// Mount the product's HTTP sub-router under the product name.
    fn register_router(&self, sub: Router);

    //
    // Preferences
    //

    async fn get_preferences_for_user(&self, user_id: &str) -> Result<Preferences, PluginError>;

    async fn update_preferences_for_user(
        &self,
        user_id: &str,
        preferences: &Preferences,
    ) -> Result<(), PluginError>;

    async fn delete_preferences_for_user(
        &self,
        user_id: &str,
        preferences: &Preferences,
    ) -> Result<(), PluginError>;

    //
    // Sessions
    //

    async fn get_session(&self, session_id: &str) -> Result<Session, PluginError>;

    //
    // Deferred operations
    //

    /// Stub: performs no subsystem call and reports success. Preserved as a
    /// documented placeholder until the frontend port specifies dialog
    /// invocation.
    async fn open_interactive_dialog(
        &self,
        dialog: OpenDialogRequest,
    ) -> Result<(), PluginError>;

    /// Stub: performs no subsystem call and returns `None`. Preserved as a
    /// documented placeholder until the slash-command port specifies
    /// execution.
    async fn execute(&self, args: &CommandArgs)
        -> Result<Option<CommandResponse>, PluginError>;
}

/// Generic key-value retrieval with decode, layered over
/// [`ServicesApi::kv_get`].
#[async_trait]
pub trait ServicesApiExt: ServicesApi {
    /// Raw-bytes fast path: copy the stored bytes verbatim, no decoding.
    ///
    /// An absent key (or an explicitly empty value; the two are
    /// indistinguishable here) is a successful no-op that leaves `dest`
    /// untouched.
    async fn get_raw(&self, key: &str, dest: &mut Vec<u8>) -> Result<(), PluginError> {
        let data = self.kv_get(key).await?;
        if data.is_empty() {
            return Ok(());
        }
        *dest = data;
        Ok(())
    }

    /// Fetch the value for `key` and decode it into `dest`.
    ///
    /// Decoding is all-or-nothing: on any failure `dest` is left exactly as
    /// it was, and the error names the offending key with the decode cause
    /// chained. Absent keys are a successful no-op, as in
    /// [`get_raw`](Self::get_raw).
    async fn get<T>(&self, key: &str, dest: &mut T) -> Result<(), PluginError>
    where
        T: DeserializeOwned + Send,
    {
        let data = self.kv_get(key).await?;
        if data.is_empty() {
            return Ok(());
        }
        let value: T = serde_json::from_slice(&data).map_err(|err| {
            PluginError::Other(
                anyhow::Error::new(err)
                    .context(format!("failed to decode value for key {key}")),
            )
        })?;
        *dest = value;
        Ok(())
    }
}

#[async_trait]
impl<S: ServicesApi + ?Sized> ServicesApiExt for S {}

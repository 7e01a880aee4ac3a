//! The delegating implementation of [`ServicesApi`].
//!
//! [`ServiceApiAdapter`] flattens the suite's per-domain subsystem ports
//! into the single interface the workflows product consumes. Every method
//! makes at most one port call and normalizes its result; the adapter keeps
//! no per-call state, caches nothing, and never retries.

use async_trait::async_trait;
use axum::Router;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

use huddle_core::{
    Bot, BotService, Channel, ChannelMember, ChannelSearchOpts, ChannelService, CloudService,
    ClusterEvent, ClusterEventSendOptions, ClusterService, CommandArgs, CommandResponse, Config,
    ConfigService, FileInfo, FileInfoService, Group, KvSetOptions, KvStoreService, License,
    LicenseService, Logger, OpenDialogRequest, OrderedSidebarCategories, Permission,
    PermissionService, Post, PostService, PreferenceService, Preferences, ProductLimits,
    RequestContext, RouterService, Session, SessionService, SidebarCategoryWithChannels,
    SystemService, Team, TeamMember, TeamService, User, UserGetOptions, UserService,
    WebsocketBroadcast,
};
use huddle_storage::{SharedDatabase, StoreService};

use crate::api::ServicesApi;
use crate::branding::{WORKFLOWS_PRODUCT_ID, WORKFLOWS_PRODUCT_NAME};
use crate::error::{normalize, PluginError};

/// The suite's subsystem ports, injected once at construction.
///
/// All fields are shared references; the adapter never rebinds them.
#[derive(Clone)]
pub struct SuiteServices {
    pub channels: Arc<dyn ChannelService>,
    pub posts: Arc<dyn PostService>,
    pub users: Arc<dyn UserService>,
    pub teams: Arc<dyn TeamService>,
    pub permissions: Arc<dyn PermissionService>,
    pub bots: Arc<dyn BotService>,
    pub licenses: Arc<dyn LicenseService>,
    pub file_infos: Arc<dyn FileInfoService>,
    pub cluster: Arc<dyn ClusterService>,
    pub cloud: Arc<dyn CloudService>,
    pub config: Arc<dyn ConfigService>,
    pub kv_store: Arc<dyn KvStoreService>,
    pub store: Arc<dyn StoreService>,
    pub system: Arc<dyn SystemService>,
    pub router: Arc<dyn RouterService>,
    pub preferences: Arc<dyn PreferenceService>,
    pub sessions: Arc<dyn SessionService>,
}

/// Adapter that presents the suite services as one [`ServicesApi`].
pub struct ServiceApiAdapter {
    services: SuiteServices,
    ctx: RequestContext,
}

impl ServiceApiAdapter {
    /// Build the adapter; the ambient execution context is created here and
    /// reused for every context-requiring call.
    pub fn new(services: SuiteServices) -> Self {
        Self {
            services,
            ctx: RequestContext::empty(Logger::new(WORKFLOWS_PRODUCT_NAME)),
        }
    }

    /// The ambient execution context this adapter threads into subsystem
    /// calls.
    pub fn context(&self) -> &RequestContext {
        &self.ctx
    }
}

#[async_trait]
impl ServicesApi for ServiceApiAdapter {
    //
    // Channels
    //

    async fn get_direct_channel(
        &self,
        user_id1: &str,
        user_id2: &str,
    ) -> Result<Channel, PluginError> {
        normalize(self.services.channels.get_direct_channel(user_id1, user_id2).await)
    }

    async fn get_channel_by_id(&self, channel_id: &str) -> Result<Channel, PluginError> {
        normalize(self.services.channels.get_channel_by_id(channel_id).await)
    }

    async fn get_channel_member(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> Result<ChannelMember, PluginError> {
        normalize(self.services.channels.get_channel_member(channel_id, user_id).await)
    }

    async fn get_channels_for_team_for_user(
        &self,
        team_id: &str,
        user_id: &str,
        include_deleted: bool,
    ) -> Result<Vec<Channel>, PluginError> {
        let opts = ChannelSearchOpts { include_deleted };
        normalize(
            self.services
                .channels
                .get_channels_for_team_for_user(team_id, user_id, &opts)
                .await,
        )
    }

    async fn get_channel_sidebar_categories(
        &self,
        user_id: &str,
        team_id: &str,
    ) -> Result<OrderedSidebarCategories, PluginError> {
        normalize(
            self.services
                .channels
                .get_channel_sidebar_categories(user_id, team_id)
                .await,
        )
    }

    async fn get_channel_members(
        &self,
        channel_id: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<ChannelMember>, PluginError> {
        normalize(
            self.services
                .channels
                .get_channel_members(channel_id, page, per_page)
                .await,
        )
    }

    async fn create_channel_sidebar_category(
        &self,
        user_id: &str,
        team_id: &str,
        category: &SidebarCategoryWithChannels,
    ) -> Result<SidebarCategoryWithChannels, PluginError> {
        normalize(
            self.services
                .channels
                .create_channel_sidebar_category(user_id, team_id, category)
                .await,
        )
    }

    async fn update_channel_sidebar_categories(
        &self,
        user_id: &str,
        team_id: &str,
        categories: &[SidebarCategoryWithChannels],
    ) -> Result<Vec<SidebarCategoryWithChannels>, PluginError> {
        normalize(
            self.services
                .channels
                .update_channel_sidebar_categories(user_id, team_id, categories)
                .await,
        )
    }

    async fn create_channel(&self, channel: &Channel) -> Result<Channel, PluginError> {
        normalize(self.services.channels.create_channel(channel).await)
    }

    async fn add_member_to_channel(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> Result<ChannelMember, PluginError> {
        normalize(self.services.channels.add_channel_member(channel_id, user_id).await)
    }

    async fn add_user_to_channel(
        &self,
        channel_id: &str,
        user_id: &str,
        as_user_id: &str,
    ) -> Result<ChannelMember, PluginError> {
        normalize(
            self.services
                .channels
                .add_user_to_channel(channel_id, user_id, as_user_id)
                .await,
        )
    }

    async fn update_channel_member_roles(
        &self,
        channel_id: &str,
        user_id: &str,
        new_roles: &str,
    ) -> Result<ChannelMember, PluginError> {
        normalize(
            self.services
                .channels
                .update_channel_member_roles(channel_id, user_id, new_roles)
                .await,
        )
    }

    async fn delete_channel_member(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> Result<(), PluginError> {
        normalize(self.services.channels.delete_channel_member(channel_id, user_id).await)
    }

    async fn add_channel_member(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> Result<ChannelMember, PluginError> {
        normalize(self.services.channels.add_channel_member(channel_id, user_id).await)
    }

    //
    // Posts
    //

    async fn create_post(&self, post: &Post) -> Result<Post, PluginError> {
        normalize(self.services.posts.create_post(&self.ctx, post).await)
    }

    async fn get_posts_by_ids(&self, post_ids: &[String]) -> Result<Vec<Post>, PluginError> {
        // The port also reports the first-inaccessible timestamp; this
        // surface does not expose it.
        let (posts, _) = normalize(self.services.posts.get_posts_by_ids(post_ids).await)?;
        Ok(posts)
    }

    async fn send_ephemeral_post(&self, user_id: &str, post: &mut Post) {
        *post = self
            .services
            .posts
            .send_ephemeral_post(&self.ctx, user_id, &*post)
            .await;
    }

    async fn get_post(&self, post_id: &str) -> Result<Post, PluginError> {
        normalize(self.services.posts.get_post(post_id).await)
    }

    async fn delete_post(&self, post_id: &str) -> Result<Post, PluginError> {
        normalize(
            self.services
                .posts
                .delete_post(&self.ctx, post_id, WORKFLOWS_PRODUCT_ID)
                .await,
        )
    }

    async fn update_post(&self, post: &Post) -> Result<Post, PluginError> {
        normalize(self.services.posts.update_post(&self.ctx, post, false).await)
    }

    //
    // Users
    //

    async fn get_user_by_id(&self, user_id: &str) -> Result<User, PluginError> {
        normalize(self.services.users.get_user(user_id).await)
    }

    async fn get_user_by_username(&self, name: &str) -> Result<User, PluginError> {
        normalize(self.services.users.get_user_by_username(name).await)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User, PluginError> {
        normalize(self.services.users.get_user_by_email(email).await)
    }

    async fn update_user(&self, user: &User) -> Result<User, PluginError> {
        normalize(self.services.users.update_user(&self.ctx, user, true).await)
    }

    async fn get_users_from_profiles(
        &self,
        options: &UserGetOptions,
    ) -> Result<Vec<User>, PluginError> {
        normalize(self.services.users.get_users_from_profiles(options).await)
    }

    //
    // Teams
    //

    async fn get_team_member(
        &self,
        team_id: &str,
        user_id: &str,
    ) -> Result<TeamMember, PluginError> {
        normalize(self.services.teams.get_member(team_id, user_id).await)
    }

    async fn create_member(
        &self,
        team_id: &str,
        user_id: &str,
    ) -> Result<TeamMember, PluginError> {
        normalize(self.services.teams.create_member(&self.ctx, team_id, user_id).await)
    }

    async fn get_group(&self, group_id: &str) -> Result<Group, PluginError> {
        normalize(self.services.teams.get_group(group_id).await)
    }

    async fn get_team(&self, team_id: &str) -> Result<Team, PluginError> {
        normalize(self.services.teams.get_team(team_id).await)
    }

    async fn get_group_member_users(
        &self,
        group_id: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<User>, PluginError> {
        normalize(
            self.services
                .teams
                .get_group_member_users(group_id, page, per_page)
                .await,
        )
    }

    //
    // Permissions (fail closed: an evaluator fault presents as denied)
    //

    async fn has_permission_to(&self, user_id: &str, permission: &Permission) -> bool {
        self.services
            .permissions
            .has_permission_to(user_id, permission)
            .await
            .unwrap_or(false)
    }

    async fn has_permission_to_team(
        &self,
        user_id: &str,
        team_id: &str,
        permission: &Permission,
    ) -> bool {
        self.services
            .permissions
            .has_permission_to_team(user_id, team_id, permission)
            .await
            .unwrap_or(false)
    }

    async fn has_permission_to_channel(
        &self,
        asking_user_id: &str,
        channel_id: &str,
        permission: &Permission,
    ) -> bool {
        self.services
            .permissions
            .has_permission_to_channel(asking_user_id, channel_id, permission)
            .await
            .unwrap_or(false)
    }

    async fn roles_grant_permission(&self, role_names: &[String], permission_id: &str) -> bool {
        self.services
            .permissions
            .roles_grant_permission(role_names, permission_id)
            .await
            .unwrap_or(false)
    }

    //
    // Bots
    //

    async fn ensure_bot(&self, bot: &Bot) -> Result<String, PluginError> {
        self.services
            .bots
            .ensure_bot(&self.ctx, WORKFLOWS_PRODUCT_ID, bot)
            .await
            .map_err(PluginError::from)
    }

    //
    // License
    //

    fn get_license(&self) -> Option<License> {
        self.services.licenses.license()
    }

    //
    // Files
    //

    async fn get_file_info(&self, file_id: &str) -> Result<FileInfo, PluginError> {
        normalize(self.services.file_infos.get_file_info(file_id).await)
    }

    //
    // Cluster
    //

    async fn publish_web_socket_event(
        &self,
        event: &str,
        payload: &Map<String, Value>,
        broadcast: &WebsocketBroadcast,
    ) {
        self.services
            .cluster
            .publish_web_socket_event(WORKFLOWS_PRODUCT_ID, event, payload, broadcast)
            .await;
    }

    async fn publish_cluster_event(
        &self,
        event: ClusterEvent,
        opts: ClusterEventSendOptions,
    ) -> Result<(), PluginError> {
        self.services
            .cluster
            .publish_cluster_event(WORKFLOWS_PRODUCT_ID, event, opts)
            .await
            .map_err(PluginError::from)
    }

    //
    // Cloud
    //

    async fn get_cloud_limits(&self) -> Result<Option<ProductLimits>, PluginError> {
        self.services.cloud.cloud_limits().await.map_err(PluginError::from)
    }

    //
    // Config
    //

    fn get_config(&self) -> Config {
        self.services.config.config()
    }

    //
    // Logging
    //

    fn logger(&self) -> Logger {
        self.ctx.logger().clone()
    }

    //
    // Key-value store
    //

    async fn kv_set_with_options(
        &self,
        key: &str,
        value: &[u8],
        options: &KvSetOptions,
    ) -> Result<bool, PluginError> {
        normalize(
            self.services
                .kv_store
                .set_with_options(WORKFLOWS_PRODUCT_ID, key, value, options)
                .await,
        )
    }

    async fn kv_get(&self, key: &str) -> Result<Vec<u8>, PluginError> {
        normalize(self.services.kv_store.get(WORKFLOWS_PRODUCT_ID, key).await)
    }

    async fn kv_delete(&self, key: &str) -> Result<(), PluginError> {
        normalize(self.services.kv_store.delete(WORKFLOWS_PRODUCT_ID, key).await)
    }

    async fn kv_list(&self, page: u64, per_page: u64) -> Result<Vec<String>, PluginError> {
        normalize(self.services.kv_store.list(WORKFLOWS_PRODUCT_ID, page, per_page).await)
    }

    //
    // Data store
    //

    fn get_master_db(&self) -> Result<SharedDatabase, PluginError> {
        Ok(self.services.store.master_db())
    }

    fn driver_name(&self) -> String {
        self.services.config.config().sql_settings.driver_name
    }

    //
    // System
    //

    fn get_diagnostic_id(&self) -> String {
        self.services.system.diagnostic_id()
    }

    //
    // Router
    //

    fn register_router(&self, sub: Router) {
        self.services.router.register_router(WORKFLOWS_PRODUCT_NAME, sub);
    }

    //
    // Preferences
    //

    async fn get_preferences_for_user(&self, user_id: &str) -> Result<Preferences, PluginError> {
        normalize(self.services.preferences.get_preferences_for_user(user_id).await)
    }

    async fn update_preferences_for_user(
        &self,
        user_id: &str,
        preferences: &Preferences,
    ) -> Result<(), PluginError> {
        normalize(
            self.services
                .preferences
                .update_preferences_for_user(user_id, preferences)
                .await,
        )
    }

    async fn delete_preferences_for_user(
        &self,
        user_id: &str,
        preferences: &Preferences,
    ) -> Result<(), PluginError> {
        normalize(
            self.services
                .preferences
                .delete_preferences_for_user(user_id, preferences)
                .await,
        )
    }

    //
    // Sessions
    //

    async fn get_session(&self, session_id: &str) -> Result<Session, PluginError> {
        self.services
            .sessions
            .get_session(session_id)
            .await
            .map_err(PluginError::from)
    }

    //
    // Deferred operations
    //

    async fn open_interactive_dialog(
        &self,
        dialog: OpenDialogRequest,
    ) -> Result<(), PluginError> {
        // TODO: delegate to the frontend service once it exposes dialog
        // invocation.
        debug!(trigger_id = %dialog.trigger_id, "open_interactive_dialog is not wired up yet");
        Ok(())
    }

    async fn execute(
        &self,
        args: &CommandArgs,
    ) -> Result<Option<CommandResponse>, PluginError> {
        // TODO: delegate to the slash-command service once its execute
        // entry point lands.
        debug!(command = %args.command, "execute is not wired up yet");
        Ok(None)
    }
}

//! Directory port for resolving platform entity references.
//!
//! Reference-typed arguments consult the directory during their transform
//! and post-transform phases. A lookup that finds nothing is a user-input
//! problem; a lookup that fails is a collaborator fault and aborts casting.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::argument::domain::{Channel, Member, Role, Snowflake, User};

/// Result type for directory lookups.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Platform directory and permission lookups.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Finds a user by identifier.
    async fn resolve_user(&self, id: Snowflake) -> DirectoryResult<Option<User>>;

    /// Finds a guild member by user identifier.
    async fn resolve_member(
        &self,
        guild_id: Snowflake,
        id: Snowflake,
    ) -> DirectoryResult<Option<Member>>;

    /// Finds a channel by identifier.
    async fn resolve_channel(&self, id: Snowflake) -> DirectoryResult<Option<Channel>>;

    /// Finds a guild role by identifier.
    async fn resolve_role(&self, guild_id: Snowflake, id: Snowflake)
    -> DirectoryResult<Option<Role>>;

    /// Reports whether `actor` may act on `target` (moderation hierarchy).
    async fn can_target(
        &self,
        guild_id: Snowflake,
        actor: Snowflake,
        target: &Member,
    ) -> DirectoryResult<bool>;
}

/// Errors raised by directory adapters.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// The directory cannot currently serve lookups.
    #[error("directory unavailable: {0}")]
    Unavailable(String),

    /// Adapter-specific failure.
    #[error("directory backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a backend error from the directory adapter.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}

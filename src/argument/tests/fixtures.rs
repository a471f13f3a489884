//! Shared fixtures for argument tests.

use std::sync::Arc;

use async_trait::async_trait;
use rstest::fixture;

use crate::argument::{
    adapters::InMemoryDirectory,
    domain::{
        CastingConfig, Channel, ChannelKind, InvocationContext, Member, RawValue, Role,
        SlotDefinition, Snowflake, TypedValue, User,
    },
    ports::{Directory, DirectoryResult},
    services::{OverloadResolver, ResolveError, cast_option},
    types::{ArgumentType, CastContext},
};

pub const GUILD: Snowflake = Snowflake::new(100_000_000_000_000_001);
pub const OTHER_GUILD: Snowflake = Snowflake::new(100_000_000_000_000_002);
pub const CALLER: Snowflake = Snowflake::new(300_000_000_000_000_001);
pub const ALICE: Snowflake = Snowflake::new(123_456_789_012_345_678);
pub const GENERAL: Snowflake = Snowflake::new(400_000_000_000_000_001);
pub const LOUNGE: Snowflake = Snowflake::new(400_000_000_000_000_002);
pub const FOREIGN: Snowflake = Snowflake::new(400_000_000_000_000_003);
pub const MODERATORS: Snowflake = Snowflake::new(500_000_000_000_000_001);

mockall::mock! {
    pub Directory {}

    #[async_trait]
    impl Directory for Directory {
        async fn resolve_user(&self, id: Snowflake) -> DirectoryResult<Option<User>>;
        async fn resolve_member(
            &self,
            guild_id: Snowflake,
            id: Snowflake,
        ) -> DirectoryResult<Option<Member>>;
        async fn resolve_channel(&self, id: Snowflake) -> DirectoryResult<Option<Channel>>;
        async fn resolve_role(
            &self,
            guild_id: Snowflake,
            id: Snowflake,
        ) -> DirectoryResult<Option<Role>>;
        async fn can_target(
            &self,
            guild_id: Snowflake,
            actor: Snowflake,
            target: &Member,
        ) -> DirectoryResult<bool>;
    }
}

pub fn alice() -> Member {
    Member::new(User::new(ALICE, "alice"), GUILD).with_nickname("Al")
}

pub fn general() -> Channel {
    Channel::new(GENERAL, GUILD, "general", ChannelKind::Text)
}

#[fixture]
pub fn directory() -> InMemoryDirectory {
    InMemoryDirectory::new()
        .with_member(alice())
        .with_channel(general())
        .with_channel(Channel::new(LOUNGE, GUILD, "lounge", ChannelKind::Voice))
        .with_channel(Channel::new(FOREIGN, OTHER_GUILD, "elsewhere", ChannelKind::Text))
        .with_role(Role::new(MODERATORS, GUILD, "moderators"))
}

#[fixture]
pub fn invocation() -> InvocationContext {
    InvocationContext::legacy(CALLER, GENERAL).in_guild(GUILD)
}

#[fixture]
pub fn resolver(directory: InMemoryDirectory) -> OverloadResolver<InMemoryDirectory> {
    OverloadResolver::new(Arc::new(directory))
}

/// Casts one raw value through a single-candidate slot named `value`.
pub async fn cast_with(
    candidate: impl ArgumentType + 'static,
    raw: RawValue,
    directory: &dyn Directory,
    invocation: &InvocationContext,
    config: &CastingConfig,
) -> Result<TypedValue, ResolveError> {
    let slot = SlotDefinition::new("value", candidate);
    let cx = CastContext::new(invocation, directory, config);
    cast_option(&slot, 0, &raw, cx).await
}

/// Casts with the default directory, a guild invocation and default config.
pub async fn cast(
    candidate: impl ArgumentType + 'static,
    raw: RawValue,
) -> Result<TypedValue, ResolveError> {
    cast_with(
        candidate,
        raw,
        &directory(),
        &invocation(),
        &CastingConfig::default(),
    )
    .await
}

/// Unwraps the user-facing error of a failed cast.
pub fn rejected(result: Result<TypedValue, ResolveError>) -> crate::argument::domain::ArgumentError {
    match result {
        Err(ResolveError::Rejected(error)) => error,
        other => panic!("expected a rejection, got {other:?}"),
    }
}

//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use chatargs::argument::{
    adapters::InMemoryDirectory,
    domain::{
        Channel, ChannelKind, ErrorKind, InvocationContext, Member, Overload, Overloads, Role,
        SignatureError, SlotDefinition, Snowflake, User,
    },
    types::{
        ChannelArgument, DurationArgument, IntegerArgument, MemberArgument, RestStringArgument,
        RoleArgument, SnowflakeArgument,
    },
};
use chatargs::command::{
    adapters::InMemoryCommandRegistry, domain::CommandDefinition,
    services::CommandArgumentService,
};
use rstest::fixture;

/// Guild the tests run in.
pub const GUILD: Snowflake = Snowflake::new(100_000_000_000_000_001);
/// Moderator issuing commands.
pub const MODERATOR: Snowflake = Snowflake::new(200_000_000_000_000_001);
/// Regular member.
pub const ALICE: Snowflake = Snowflake::new(200_000_000_000_000_002);
/// Guild owner, protected from moderation.
pub const OWNER: Snowflake = Snowflake::new(200_000_000_000_000_003);
/// A user who is not a member of the guild.
pub const STRANGER: Snowflake = Snowflake::new(200_000_000_000_000_004);
/// Text channel commands are issued from.
pub const GENERAL: Snowflake = Snowflake::new(300_000_000_000_000_001);
/// Voice channel.
pub const STAGE: Snowflake = Snowflake::new(300_000_000_000_000_002);
/// Role granted to helpers.
pub const HELPERS: Snowflake = Snowflake::new(400_000_000_000_000_001);

/// Service under test.
pub type TestService = CommandArgumentService<InMemoryCommandRegistry, InMemoryDirectory>;

/// Provides a guild with members, channels and a role.
#[fixture]
pub fn directory() -> InMemoryDirectory {
    InMemoryDirectory::new()
        .with_member(Member::new(User::new(MODERATOR, "mod"), GUILD))
        .with_member(Member::new(User::new(ALICE, "alice"), GUILD).with_nickname("Ally"))
        .with_member(Member::new(User::new(OWNER, "owner"), GUILD))
        .with_user(User::new(STRANGER, "stranger"))
        .with_channel(Channel::new(GENERAL, GUILD, "general", ChannelKind::Text))
        .with_channel(Channel::new(STAGE, GUILD, "stage", ChannelKind::Voice))
        .with_role(Role::new(HELPERS, GUILD, "helpers"))
        .protect(GUILD, OWNER)
}

/// Builds the moderation command set.
///
/// # Errors
///
/// Returns an error if a signature is rejected at registration.
pub fn moderation_commands() -> Result<Vec<CommandDefinition>, SignatureError> {
    let ban = Overloads::new([
        Overload::new([
            SlotDefinition::new("target", MemberArgument::targetable()),
            SlotDefinition::new("days", IntegerArgument)
                .with_min(0)
                .with_max(7)
                .optional(),
            SlotDefinition::new("reason", RestStringArgument).optional(),
        ])?,
        Overload::new([
            SlotDefinition::new("id", SnowflakeArgument),
            SlotDefinition::new("reason", RestStringArgument).optional(),
        ])?,
    ])?;
    let mute = Overloads::single(Overload::new([
        SlotDefinition::new("target", MemberArgument::targetable()),
        SlotDefinition::new("length", DurationArgument)
            .with_min(60)
            .with_message(ErrorKind::InvalidRange, "Mutes must last at least a minute."),
        SlotDefinition::new("reason", RestStringArgument).optional(),
    ])?);
    let slowmode = Overloads::single(Overload::new([
        SlotDefinition::new("channel", ChannelArgument::of_kinds([ChannelKind::Text])),
        SlotDefinition::new("interval", DurationArgument).with_max(21_600),
    ])?);
    let grant = Overloads::single(Overload::new([
        SlotDefinition::new("member", MemberArgument::new()),
        SlotDefinition::new("role", RoleArgument),
    ])?);

    Ok(vec![
        CommandDefinition::new("ban", "Ban a member or a user by ID", ban).with_alias("b"),
        CommandDefinition::new("mute", "Mute a member for a while", mute),
        CommandDefinition::new("slowmode", "Set a channel's slowmode", slowmode),
        CommandDefinition::new("grant", "Give a member a role", grant).with_alias("addrole"),
    ])
}

/// Provides the command service over the moderation commands.
#[fixture]
pub fn service(directory: InMemoryDirectory) -> TestService {
    let commands = moderation_commands().expect("moderation signatures should be valid");
    let registry =
        InMemoryCommandRegistry::with_commands(commands).expect("registry should accept commands");
    CommandArgumentService::new(Arc::new(registry), Arc::new(directory))
}

/// Provides a free-text invocation by the moderator in `#general`.
#[fixture]
pub fn message() -> InvocationContext {
    InvocationContext::legacy(MODERATOR, GENERAL).in_guild(GUILD)
}

/// Provides an interactive invocation by the moderator in `#general`.
#[fixture]
pub fn interaction() -> InvocationContext {
    InvocationContext::interactive(MODERATOR, GENERAL).in_guild(GUILD)
}

//! Platform entities that reference-typed arguments resolve to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Shortest snowflake accepted by default.
pub const MIN_SNOWFLAKE_DIGITS: usize = 15;
/// Longest snowflake accepted by default (`u64::MAX` has 20 digits).
pub const MAX_SNOWFLAKE_DIGITS: usize = 20;

/// Platform-wide numeric identifier for users, channels, roles and guilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snowflake(u64);

impl Snowflake {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parses a bare decimal identifier using the default digit bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSnowflakeError`] when the text is not 15 to 20 ASCII
    /// digits or does not fit in 64 bits.
    pub fn parse(raw: &str) -> Result<Self, ParseSnowflakeError> {
        Self::parse_with_bounds(raw, MIN_SNOWFLAKE_DIGITS, MAX_SNOWFLAKE_DIGITS)
    }

    /// Parses a bare decimal identifier with explicit digit bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSnowflakeError`] when the text has a non-digit
    /// character, a length outside `min_digits..=max_digits`, or overflows.
    pub fn parse_with_bounds(
        raw: &str,
        min_digits: usize,
        max_digits: usize,
    ) -> Result<Self, ParseSnowflakeError> {
        let length = raw.len();
        if length < min_digits
            || length > max_digits
            || !raw.bytes().all(|byte| byte.is_ascii_digit())
        {
            return Err(ParseSnowflakeError(raw.to_owned()));
        }
        raw.parse::<u64>()
            .map(Self)
            .map_err(|_| ParseSnowflakeError(raw.to_owned()))
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Snowflake {
    type Err = ParseSnowflakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error returned when text is not a valid snowflake.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{0}' is not a valid snowflake")]
pub struct ParseSnowflakeError(pub String);

/// Mention syntaxes understood by legacy tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentionKind {
    /// `<@id>` or `<@!id>`.
    User,
    /// `<#id>`.
    Channel,
    /// `<@&id>`.
    Role,
}

impl MentionKind {
    /// All mention kinds, in the order they are probed.
    pub const ALL: [Self; 3] = [Self::Role, Self::User, Self::Channel];

    /// Returns the identifier text wrapped by a mention of this kind.
    #[must_use]
    pub fn strip(self, raw: &str) -> Option<&str> {
        match self {
            Self::User => raw
                .strip_prefix("<@")
                .and_then(|inner| inner.strip_suffix('>'))
                .filter(|inner| !inner.starts_with('&'))
                .map(|inner| inner.strip_prefix('!').unwrap_or(inner)),
            Self::Channel => raw
                .strip_prefix("<#")
                .and_then(|inner| inner.strip_suffix('>')),
            Self::Role => raw
                .strip_prefix("<@&")
                .and_then(|inner| inner.strip_suffix('>')),
        }
    }
}

/// A platform user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier.
    pub id: Snowflake,
    /// Account name.
    pub username: String,
    /// Whether the account is a bot.
    #[serde(default)]
    pub bot: bool,
}

impl User {
    /// Creates a non-bot user.
    #[must_use]
    pub fn new(id: Snowflake, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            bot: false,
        }
    }

    /// Marks the user as a bot account.
    #[must_use]
    pub const fn as_bot(mut self) -> Self {
        self.bot = true;
        self
    }
}

/// A user's membership in one guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// The underlying user.
    pub user: User,
    /// Guild the membership belongs to.
    pub guild_id: Snowflake,
    /// Guild-specific nickname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl Member {
    /// Creates a membership without a nickname.
    #[must_use]
    pub const fn new(user: User, guild_id: Snowflake) -> Self {
        Self {
            user,
            guild_id,
            nickname: None,
        }
    }

    /// Sets the nickname.
    #[must_use]
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Returns the member's user identifier.
    #[must_use]
    pub const fn id(&self) -> Snowflake {
        self.user.id
    }

    /// Returns the nickname, falling back to the account name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.user.username)
    }
}

/// Channel categories a channel argument can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    /// Guild text channel.
    Text,
    /// Guild voice channel.
    Voice,
    /// Channel category.
    Category,
    /// Thread inside a text channel.
    Thread,
    /// Direct-message channel.
    Direct,
}

impl ChannelKind {
    /// Returns the canonical snake-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Voice => "voice",
            Self::Category => "category",
            Self::Thread => "thread",
            Self::Direct => "direct",
        }
    }
}

/// A platform channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel identifier.
    pub id: Snowflake,
    /// Owning guild, absent for direct messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    /// Channel name.
    pub name: String,
    /// Channel category.
    pub kind: ChannelKind,
}

impl Channel {
    /// Creates a guild channel.
    #[must_use]
    pub fn new(
        id: Snowflake,
        guild_id: Snowflake,
        name: impl Into<String>,
        kind: ChannelKind,
    ) -> Self {
        Self {
            id,
            guild_id: Some(guild_id),
            name: name.into(),
            kind,
        }
    }

    /// Creates a direct-message channel.
    #[must_use]
    pub fn direct(id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            guild_id: None,
            name: name.into(),
            kind: ChannelKind::Direct,
        }
    }
}

/// A guild role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role identifier.
    pub id: Snowflake,
    /// Owning guild.
    pub guild_id: Snowflake,
    /// Role name.
    pub name: String,
}

impl Role {
    /// Creates a role.
    #[must_use]
    pub fn new(id: Snowflake, guild_id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            guild_id,
            name: name.into(),
        }
    }
}

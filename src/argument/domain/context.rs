//! Per-invocation context supplied by the dispatcher.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{InvocationId, Snowflake};

/// How the command was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationMode {
    /// Free-text message that needs tokenizing.
    Legacy,
    /// Platform-parsed interactive command with named options.
    Interactive,
}

impl InvocationMode {
    /// Returns the canonical snake-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Interactive => "interactive",
        }
    }
}

impl fmt::Display for InvocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who invoked a command, and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationContext {
    id: InvocationId,
    mode: InvocationMode,
    caller: Snowflake,
    guild_id: Option<Snowflake>,
    channel_id: Snowflake,
}

impl InvocationContext {
    /// Creates a context for a legacy message invocation.
    #[must_use]
    pub fn legacy(caller: Snowflake, channel_id: Snowflake) -> Self {
        Self::new(InvocationMode::Legacy, caller, channel_id)
    }

    /// Creates a context for an interactive invocation.
    #[must_use]
    pub fn interactive(caller: Snowflake, channel_id: Snowflake) -> Self {
        Self::new(InvocationMode::Interactive, caller, channel_id)
    }

    fn new(mode: InvocationMode, caller: Snowflake, channel_id: Snowflake) -> Self {
        Self {
            id: InvocationId::new(),
            mode,
            caller,
            guild_id: None,
            channel_id,
        }
    }

    /// Sets the containing guild.
    #[must_use]
    pub const fn in_guild(mut self, guild_id: Snowflake) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    /// Replaces the generated invocation identifier.
    #[must_use]
    pub const fn with_id(mut self, id: InvocationId) -> Self {
        self.id = id;
        self
    }

    /// Returns the invocation identifier.
    #[must_use]
    pub const fn id(&self) -> InvocationId {
        self.id
    }

    /// Returns the invocation mode.
    #[must_use]
    pub const fn mode(&self) -> InvocationMode {
        self.mode
    }

    /// Returns the invoking user.
    #[must_use]
    pub const fn caller(&self) -> Snowflake {
        self.caller
    }

    /// Returns the containing guild, absent in direct messages.
    #[must_use]
    pub const fn guild_id(&self) -> Option<Snowflake> {
        self.guild_id
    }

    /// Returns the containing channel.
    #[must_use]
    pub const fn channel_id(&self) -> Snowflake {
        self.channel_id
    }
}

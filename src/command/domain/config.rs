//! Command layer configuration.

use serde::{Deserialize, Serialize};

const DEFAULT_PREFIX: &str = "!";

/// How free-text messages are recognised as commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    /// Text a message must start with to be treated as a command.
    pub prefix: String,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_owned(),
        }
    }
}

impl CommandConfig {
    /// Sets the command prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

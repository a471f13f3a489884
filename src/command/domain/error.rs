//! Error types for command definitions.

use thiserror::Error;

/// Problems with a command definition, detected at registration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandDefinitionError {
    /// The command name is empty, too long or contains invalid characters.
    #[error("invalid command name '{0}'")]
    InvalidName(String),

    /// An alias is empty, too long or contains invalid characters.
    #[error("invalid alias '{alias}' for command '{command}'")]
    InvalidAlias {
        /// Command name.
        command: String,
        /// Offending alias.
        alias: String,
    },

    /// An alias repeats the command name or another alias.
    #[error("alias '{alias}' is declared twice for command '{command}'")]
    DuplicateAlias {
        /// Command name.
        command: String,
        /// Repeated alias.
        alias: String,
    },
}

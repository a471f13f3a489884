//! Command registry port.
//!
//! The registry supplies command definitions to the argument service.

use std::sync::Arc;
use thiserror::Error;

use crate::command::domain::CommandDefinition;

/// Result type for command registry operations.
pub type CommandRegistryResult<T> = Result<T, CommandRegistryError>;

/// Port for looking up command definitions.
pub trait CommandRegistry: Send + Sync {
    /// Finds a command by name or alias, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError`] when registry access fails.
    fn find_by_name(&self, name: &str) -> CommandRegistryResult<Option<Arc<CommandDefinition>>>;

    /// Lists every command, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError`] when registry access fails.
    fn list(&self) -> CommandRegistryResult<Vec<Arc<CommandDefinition>>>;
}

/// Errors for command registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandRegistryError {
    /// The registry was given an invalid or conflicting definition.
    #[error("invalid command definition: {0}")]
    InvalidDefinition(String),

    /// General storage or adapter failure.
    #[error("command registry unavailable: {0}")]
    Unavailable(String),
}

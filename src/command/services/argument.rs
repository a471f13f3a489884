//! Command argument resolution service.

use std::sync::Arc;
use thiserror::Error;

use crate::argument::domain::{BoundArguments, CastingConfig, InvocationContext, OptionBag};
use crate::argument::ports::Directory;
use crate::argument::services::{ArgumentInput, OverloadResolver, ResolveError};
use crate::command::domain::{CommandConfig, CommandDefinition, LegacyMessage};
use crate::command::ports::{CommandRegistry, CommandRegistryError};

/// Errors raised while resolving a command invocation.
#[derive(Debug, Clone, Error)]
pub enum CommandError {
    /// No command answers to the name.
    #[error("command '{0}' was not found")]
    UnknownCommand(String),

    /// The registry failed.
    #[error(transparent)]
    Registry(#[from] CommandRegistryError),

    /// Argument resolution failed.
    #[error(transparent)]
    Arguments(#[from] ResolveError),
}

/// A command together with its bound arguments.
#[derive(Debug, Clone)]
pub struct ResolvedCommand {
    command: Arc<CommandDefinition>,
    arguments: BoundArguments,
}

impl ResolvedCommand {
    /// Returns the matched command.
    #[must_use]
    pub fn command(&self) -> &CommandDefinition {
        &self.command
    }

    /// Returns the bound arguments.
    #[must_use]
    pub const fn arguments(&self) -> &BoundArguments {
        &self.arguments
    }

    /// Splits into the command and its arguments.
    #[must_use]
    pub fn into_parts(self) -> (Arc<CommandDefinition>, BoundArguments) {
        (self.command, self.arguments)
    }
}

/// Service that finds the invoked command and resolves its arguments.
#[derive(Clone)]
pub struct CommandArgumentService<R, D>
where
    R: CommandRegistry,
    D: Directory,
{
    registry: Arc<R>,
    resolver: OverloadResolver<D>,
    config: CommandConfig,
}

impl<R, D> CommandArgumentService<R, D>
where
    R: CommandRegistry,
    D: Directory,
{
    /// Creates a service with default configuration.
    #[must_use]
    pub fn new(registry: Arc<R>, directory: Arc<D>) -> Self {
        Self {
            registry,
            resolver: OverloadResolver::new(directory),
            config: CommandConfig::default(),
        }
    }

    /// Replaces the command configuration.
    #[must_use]
    pub fn with_config(mut self, config: CommandConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the casting configuration.
    #[must_use]
    pub fn with_casting(mut self, config: CastingConfig) -> Self {
        self.resolver = self.resolver.with_config(config);
        self
    }

    /// Returns the command configuration.
    #[must_use]
    pub const fn config(&self) -> &CommandConfig {
        &self.config
    }

    /// Resolves a free-text chat message.
    ///
    /// Returns `Ok(None)` when the message is not addressed to the bot.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnknownCommand`] for unknown command names and
    /// [`CommandError::Arguments`] when the arguments do not resolve.
    pub async fn resolve_message(
        &self,
        content: &str,
        invocation: &InvocationContext,
    ) -> Result<Option<ResolvedCommand>, CommandError> {
        let Some(message) = LegacyMessage::parse(&self.config.prefix, content) else {
            return Ok(None);
        };
        self.resolve(message.name(), ArgumentInput::Legacy(message.body()), invocation)
            .await
            .map(Some)
    }

    /// Resolves an interactive command invocation.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnknownCommand`] for unknown command names and
    /// [`CommandError::Arguments`] when the options do not resolve.
    pub async fn resolve_interaction(
        &self,
        name: &str,
        options: &OptionBag,
        invocation: &InvocationContext,
    ) -> Result<ResolvedCommand, CommandError> {
        self.resolve(name, ArgumentInput::Interaction(options), invocation)
            .await
    }

    async fn resolve(
        &self,
        name: &str,
        input: ArgumentInput<'_>,
        invocation: &InvocationContext,
    ) -> Result<ResolvedCommand, CommandError> {
        let command = self
            .registry
            .find_by_name(name)?
            .ok_or_else(|| CommandError::UnknownCommand(name.to_owned()))?;
        let arguments = self
            .resolver
            .resolve(command.overloads(), input, invocation)
            .await?;
        Ok(ResolvedCommand { command, arguments })
    }
}

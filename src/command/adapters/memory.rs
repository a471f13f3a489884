//! In-memory command registry adapter.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::command::domain::CommandDefinition;
use crate::command::ports::{CommandRegistry, CommandRegistryError, CommandRegistryResult};

/// In-memory registry for command definitions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommandRegistry {
    commands: BTreeMap<String, Arc<CommandDefinition>>,
    names: HashMap<String, String>,
}

impl InMemoryCommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from supplied command definitions.
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError::InvalidDefinition`] when a definition
    /// is invalid or a name or alias is claimed by two commands.
    pub fn with_commands(
        definitions: impl IntoIterator<Item = CommandDefinition>,
    ) -> CommandRegistryResult<Self> {
        let mut registry = Self::default();
        for definition in definitions {
            definition
                .validate()
                .map_err(|error| CommandRegistryError::InvalidDefinition(error.to_string()))?;

            let primary = definition.name().to_owned();
            for name in definition.names() {
                if let Some(owner) = registry.names.insert(name.to_owned(), primary.clone()) {
                    return Err(CommandRegistryError::InvalidDefinition(format!(
                        "name '{name}' is claimed by both '{owner}' and '{primary}'"
                    )));
                }
            }
            registry.commands.insert(primary, Arc::new(definition));
        }
        tracing::info!(commands = registry.commands.len(), "command registry built");
        Ok(registry)
    }

    /// Returns the number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if no commands are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl CommandRegistry for InMemoryCommandRegistry {
    fn find_by_name(&self, name: &str) -> CommandRegistryResult<Option<Arc<CommandDefinition>>> {
        Ok(self
            .names
            .get(&name.to_lowercase())
            .and_then(|primary| self.commands.get(primary))
            .cloned())
    }

    fn list(&self) -> CommandRegistryResult<Vec<Arc<CommandDefinition>>> {
        Ok(self.commands.values().cloned().collect())
    }
}

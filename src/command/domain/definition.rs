//! Command definitions.

use crate::argument::domain::Overloads;

use super::CommandDefinitionError;

const MAX_NAME_LENGTH: usize = 32;

/// A command as the registry knows it: its names and argument overloads.
///
/// Names and aliases are stored lowercase.
#[derive(Debug, Clone)]
pub struct CommandDefinition {
    name: String,
    aliases: Vec<String>,
    description: String,
    overloads: Overloads,
}

impl CommandDefinition {
    /// Creates a command definition.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        overloads: Overloads,
    ) -> Self {
        Self {
            name: name.into().to_lowercase(),
            aliases: Vec::new(),
            description: description.into(),
            overloads,
        }
    }

    /// Adds an alternative name.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into().to_lowercase());
        self
    }

    /// Returns the primary name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the aliases in declaration order.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the argument overloads.
    #[must_use]
    pub const fn overloads(&self) -> &Overloads {
        &self.overloads
    }

    /// Iterates the primary name followed by the aliases.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Reports whether `name` is the command's name or one of its aliases.
    #[must_use]
    pub fn answers_to(&self, name: &str) -> bool {
        let wanted = name.to_lowercase();
        self.names().any(|candidate| candidate == wanted)
    }

    /// Checks the command's names.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDefinitionError`] when the name or an alias is not a
    /// valid command name, or an alias repeats another name.
    pub fn validate(&self) -> Result<(), CommandDefinitionError> {
        if !is_valid_command_name(&self.name) {
            return Err(CommandDefinitionError::InvalidName(self.name.clone()));
        }
        for (index, alias) in self.aliases.iter().enumerate() {
            if !is_valid_command_name(alias) {
                return Err(CommandDefinitionError::InvalidAlias {
                    command: self.name.clone(),
                    alias: alias.clone(),
                });
            }
            let repeated = *alias == self.name
                || self
                    .aliases
                    .iter()
                    .take(index)
                    .any(|earlier| earlier == alias);
            if repeated {
                return Err(CommandDefinitionError::DuplicateAlias {
                    command: self.name.clone(),
                    alias: alias.clone(),
                });
            }
        }
        Ok(())
    }
}

fn is_valid_command_name(name: &str) -> bool {
    let length = name.chars().count();
    (1..=MAX_NAME_LENGTH).contains(&length)
        && name
            .chars()
            .all(|character| character.is_alphanumeric() || matches!(character, '-' | '_'))
}

//! Slot definitions: one named parameter position inside an overload.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::message::{self, MessageContext};
use super::{ArgumentError, ErrorKind, Rejection, RuleName, Rules, SignatureError};
use crate::argument::types::{ArgumentType, Extent};

/// One named parameter of an overload, with its candidate argument types.
///
/// # Examples
///
/// ```
/// use chatargs::argument::domain::{ErrorKind, SlotDefinition};
/// use chatargs::argument::types::{IntegerArgument, StringArgument};
///
/// let slot = SlotDefinition::new("count", IntegerArgument)
///     .or(StringArgument)
///     .with_max(100)
///     .with_message(ErrorKind::InvalidRange, "Pick at most {{ max }}.")
///     .optional();
///
/// assert_eq!(slot.name(), "count");
/// assert_eq!(slot.candidates().len(), 2);
/// assert!(slot.is_optional());
/// ```
#[derive(Debug, Clone)]
pub struct SlotDefinition {
    names: Vec<String>,
    candidates: Vec<Arc<dyn ArgumentType>>,
    optional: bool,
    rules: Rules,
    kind_messages: BTreeMap<ErrorKind, String>,
    rule_messages: BTreeMap<RuleName, String>,
}

impl SlotDefinition {
    /// Creates a required slot with a single candidate type.
    #[must_use]
    pub fn new(name: impl Into<String>, candidate: impl ArgumentType + 'static) -> Self {
        Self::shared(name, Arc::new(candidate))
    }

    /// Creates a required slot from a shared candidate type.
    #[must_use]
    pub fn shared(name: impl Into<String>, candidate: Arc<dyn ArgumentType>) -> Self {
        Self {
            names: vec![name.into()],
            candidates: vec![candidate],
            optional: false,
            rules: Rules::new(),
            kind_messages: BTreeMap::new(),
            rule_messages: BTreeMap::new(),
        }
    }

    /// Adds a fallback candidate type tried against the same raw value.
    #[must_use]
    pub fn or(self, candidate: impl ArgumentType + 'static) -> Self {
        self.or_shared(Arc::new(candidate))
    }

    /// Adds a shared fallback candidate type.
    #[must_use]
    pub fn or_shared(mut self, candidate: Arc<dyn ArgumentType>) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Adds a fallback candidate that binds under its own name.
    ///
    /// A slot declaring one name per candidate binds its value under the name
    /// paired with whichever candidate succeeded.
    #[must_use]
    pub fn or_named(mut self, name: impl Into<String>, candidate: impl ArgumentType + 'static) -> Self {
        self.names.push(name.into());
        self.candidates.push(Arc::new(candidate));
        self
    }

    /// Marks the slot optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Replaces the slot's rules.
    #[must_use]
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Adds a `range:min` rule.
    #[must_use]
    pub fn with_min(mut self, min: i64) -> Self {
        self.rules = self.rules.with_min(min);
        self
    }

    /// Adds a `range:max` rule.
    #[must_use]
    pub fn with_max(mut self, max: i64) -> Self {
        self.rules = self.rules.with_max(max);
        self
    }

    /// Adds a `choices` rule.
    #[must_use]
    pub fn with_choices(mut self, choices: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.rules = self.rules.with_choices(choices);
        self
    }

    /// Overrides the message template for one failure kind.
    #[must_use]
    pub fn with_message(mut self, kind: ErrorKind, template: impl Into<String>) -> Self {
        self.kind_messages.insert(kind, template.into());
        self
    }

    /// Overrides the message template for one rule.
    #[must_use]
    pub fn with_rule_message(mut self, rule: RuleName, template: impl Into<String>) -> Self {
        self.rule_messages.insert(rule, template.into());
        self
    }

    /// Returns the primary name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.names.first().map_or("", String::as_str)
    }

    /// Returns every accepted name, primary first.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the candidate types in trial order.
    #[must_use]
    pub fn candidates(&self) -> &[Arc<dyn ArgumentType>] {
        &self.candidates
    }

    /// Returns whether the slot may be omitted.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    /// Returns the slot's rules.
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Returns whether any candidate reads the rest of the input.
    #[must_use]
    pub fn reads_rest(&self) -> bool {
        self.candidates
            .iter()
            .any(|candidate| candidate.extent() == Extent::Rest)
    }

    /// Returns the record key for a value cast by candidate `index`.
    #[must_use]
    pub fn binding_name(&self, index: usize) -> &str {
        if self.names.len() == self.candidates.len() {
            self.names.get(index).map_or_else(|| self.name(), String::as_str)
        } else {
            self.name()
        }
    }

    /// Builds the user-facing error for a rejection at this slot.
    ///
    /// Precedence: rule override, kind override, the rejection's own
    /// message, the candidate's default for the kind, then the generic
    /// positional message.
    pub(crate) fn error(
        &self,
        position: usize,
        rejection: &Rejection,
        candidate: Option<&dyn ArgumentType>,
        value: Option<String>,
    ) -> ArgumentError {
        let kind = rejection.kind();
        let template = rejection
            .rule()
            .and_then(|rule| self.rule_messages.get(&rule).map(String::as_str))
            .or_else(|| self.kind_messages.get(&kind).map(String::as_str))
            .or_else(|| rejection.message())
            .or_else(|| candidate.and_then(|ty| ty.default_message(kind)));

        let text = template.map_or_else(
            || message::generic_message(kind, position, self.name()),
            |source| {
                message::render(
                    source,
                    &MessageContext {
                        name: self.name(),
                        position,
                        kind,
                        value,
                        rules: &self.rules,
                    },
                )
            },
        );
        ArgumentError::new(text, position, kind)
    }

    /// Builds the [`ErrorKind::Required`] error for an omitted value.
    pub(crate) fn required_error(&self, position: usize) -> ArgumentError {
        let first = self.candidates.first().map(|candidate| &**candidate);
        self.error(position, &Rejection::new(ErrorKind::Required), first, None)
    }

    pub(crate) fn validate(&self, position: usize, is_last: bool) -> Result<(), SignatureError> {
        if self.names.is_empty() {
            return Err(SignatureError::MissingSlotName { position });
        }
        if let Some(invalid) = self.names.iter().find(|name| !is_valid_identifier(name)) {
            return Err(SignatureError::InvalidSlotName(invalid.clone()));
        }
        if self.candidates.is_empty() {
            return Err(SignatureError::MissingCandidates {
                position,
                name: self.name().to_owned(),
            });
        }
        if self.names.len() != 1 && self.names.len() != self.candidates.len() {
            return Err(SignatureError::NameCountMismatch {
                name: self.name().to_owned(),
                names: self.names.len(),
                candidates: self.candidates.len(),
            });
        }
        if self.reads_rest() && !is_last {
            return Err(SignatureError::RestNotLast {
                position,
                name: self.name().to_owned(),
            });
        }
        if self.reads_rest()
            && self
                .candidates
                .iter()
                .any(|candidate| candidate.extent() != Extent::Rest)
        {
            return Err(SignatureError::MixedExtents(self.name().to_owned()));
        }
        self.validate_rules()?;
        self.validate_templates()
    }

    fn validate_rules(&self) -> Result<(), SignatureError> {
        if let (Some(min), Some(max)) = (self.rules.min(), self.rules.max())
            && min > max
        {
            return Err(SignatureError::InvertedRange {
                name: self.name().to_owned(),
                min,
                max,
            });
        }
        if self.rules.choices().is_some_and(<[String]>::is_empty) {
            return Err(SignatureError::EmptyChoices(self.name().to_owned()));
        }
        Ok(())
    }

    fn validate_templates(&self) -> Result<(), SignatureError> {
        self.kind_messages
            .values()
            .chain(self.rule_messages.values())
            .try_for_each(|template| {
                message::check_template(template).map_err(|reason| {
                    SignatureError::InvalidTemplate {
                        name: self.name().to_owned(),
                        reason,
                    }
                })
            })
    }
}

fn is_valid_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|character| character.is_ascii_alphanumeric() || matches!(character, '-' | '_'))
}

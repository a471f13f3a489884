//! Overload resolution.

use std::sync::Arc;

use crate::argument::domain::{
    ArgumentError, BoundArguments, CastingConfig, ErrorKind, InvocationContext, OptionBag,
    Overload, Overloads, Rejection, SlotDefinition, TypedValue,
};
use crate::argument::ports::{Directory, DirectoryError};
use crate::argument::types::CastContext;

use super::cast::{CastCache, cast_slot};
use super::source::{Fetch, InteractionSource, LegacySource, RawValueSource};
use super::ResolveError;

/// Raw input for one invocation.
#[derive(Debug, Clone, Copy)]
pub enum ArgumentInput<'a> {
    /// Free-text command body following the command name.
    Legacy(&'a str),
    /// Platform-parsed named options.
    Interaction(&'a OptionBag),
}

/// Chooses the overload matching an invocation's input and binds its slots.
///
/// Overloads are tried in declaration order and the first one whose slots
/// all bind wins. When none does, the failure that got furthest through its
/// slots is reported; ties go to the earliest-declared overload.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use chatargs::argument::adapters::InMemoryDirectory;
/// use chatargs::argument::domain::{
///     InvocationContext, Overload, Overloads, SlotDefinition, Snowflake,
/// };
/// use chatargs::argument::services::OverloadResolver;
/// use chatargs::argument::types::IntegerArgument;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let overloads = Overloads::single(Overload::new([SlotDefinition::new(
///     "count",
///     IntegerArgument,
/// )])?);
/// let resolver = OverloadResolver::new(Arc::new(InMemoryDirectory::new()));
/// let invocation = InvocationContext::legacy(Snowflake::new(1), Snowflake::new(2));
/// let bound = resolver.resolve_legacy(&overloads, "42", &invocation).await?;
/// assert_eq!(bound.integer("count"), Some(42));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct OverloadResolver<D>
where
    D: Directory,
{
    directory: Arc<D>,
    config: CastingConfig,
}

impl<D> OverloadResolver<D>
where
    D: Directory,
{
    /// Creates a resolver using the default casting configuration.
    #[must_use]
    pub fn new(directory: Arc<D>) -> Self {
        Self {
            directory,
            config: CastingConfig::default(),
        }
    }

    /// Replaces the casting configuration.
    #[must_use]
    pub const fn with_config(mut self, config: CastingConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the casting configuration.
    #[must_use]
    pub const fn config(&self) -> &CastingConfig {
        &self.config
    }

    /// Resolves input of either mode against `overloads`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Rejected`] with the selected user-facing error
    /// when no overload matches, or [`ResolveError::Directory`] when a
    /// directory lookup fails.
    pub async fn resolve(
        &self,
        overloads: &Overloads,
        input: ArgumentInput<'_>,
        invocation: &InvocationContext,
    ) -> Result<BoundArguments, ResolveError> {
        match input {
            ArgumentInput::Legacy(body) => {
                self.resolve_legacy(overloads, body, invocation).await
            }
            ArgumentInput::Interaction(options) => {
                self.resolve_interaction(overloads, options, invocation)
                    .await
            }
        }
    }

    /// Resolves a free-text command body.
    ///
    /// # Errors
    ///
    /// See [`OverloadResolver::resolve`].
    pub async fn resolve_legacy(
        &self,
        overloads: &Overloads,
        body: &str,
        invocation: &InvocationContext,
    ) -> Result<BoundArguments, ResolveError> {
        self.resolve_with(overloads, &LegacySource::new(body), invocation)
            .await
    }

    /// Resolves a platform option bag.
    ///
    /// # Errors
    ///
    /// See [`OverloadResolver::resolve`].
    pub async fn resolve_interaction(
        &self,
        overloads: &Overloads,
        options: &OptionBag,
        invocation: &InvocationContext,
    ) -> Result<BoundArguments, ResolveError> {
        self.resolve_with(overloads, &InteractionSource::new(options), invocation)
            .await
    }

    #[tracing::instrument(
        name = "resolve_overloads",
        skip_all,
        fields(
            invocation = %invocation.id(),
            mode = source.mode().as_str(),
            overloads = overloads.len()
        )
    )]
    async fn resolve_with(
        &self,
        overloads: &Overloads,
        source: &dyn RawValueSource,
        invocation: &InvocationContext,
    ) -> Result<BoundArguments, ResolveError> {
        let cx = CastContext::new(invocation, self.directory.as_ref(), &self.config);
        let mut cache = CastCache::default();
        let mut furthest: Option<ArgumentError> = None;

        for (index, overload) in overloads.iter().enumerate() {
            match attempt(index, overload, source, cx, &mut cache).await? {
                Ok(bound) => {
                    tracing::debug!(overload = index, "overload matched");
                    return Ok(bound);
                }
                Err(error) => {
                    tracing::debug!(
                        overload = index,
                        position = error.position(),
                        kind = %error.kind(),
                        "overload rejected"
                    );
                    if furthest
                        .as_ref()
                        .is_none_or(|best| error.position() > best.position())
                    {
                        furthest = Some(error);
                    }
                }
            }
        }

        // `Overloads` is never empty, so a failure has always been recorded.
        let selected = furthest
            .unwrap_or_else(|| ArgumentError::new("No overload matched.", 0, ErrorKind::Required));
        tracing::debug!(
            position = selected.position(),
            kind = %selected.kind(),
            "no overload matched"
        );
        Err(selected.into())
    }
}

/// Tries one overload. The outer error aborts resolution; the inner one is a
/// rejection at a specific slot.
async fn attempt(
    index: usize,
    overload: &Overload,
    source: &dyn RawValueSource,
    cx: CastContext<'_>,
    cache: &mut CastCache,
) -> Result<Result<BoundArguments, ArgumentError>, DirectoryError> {
    let mut bound = BoundArguments::new(index);
    let mut cursor = 0;

    for (position, slot) in overload.slots().iter().enumerate() {
        let (raw, consumed) = match source.fetch(slot, cursor) {
            Fetch::Value { raw, consumed } => (raw, consumed),
            Fetch::Missing if slot.is_optional() => {
                bind_absent(&mut bound, slot);
                continue;
            }
            Fetch::Missing => return Ok(Err(slot.required_error(position))),
            Fetch::Malformed { text, fault } => {
                let rejection = Rejection::syntax()
                    .with_message(format!("`{{{{ name }}}}` contains {}.", fault.describe()));
                let first = slot.candidates().first().map(|candidate| &**candidate);
                return Ok(Err(slot.error(position, &rejection, first, Some(text))));
            }
        };

        match cast_slot(slot, &raw, cx.at(position, slot.name()), cache).await {
            Ok((candidate, value)) => {
                bound.bind(slot.binding_name(candidate), value);
                cursor += consumed;
            }
            Err(ResolveError::Rejected(error)) => return Ok(Err(error)),
            Err(ResolveError::Directory(error)) => return Err(error),
        }
    }

    Ok(Ok(bound))
}

fn bind_absent(bound: &mut BoundArguments, slot: &SlotDefinition) {
    for name in slot.names() {
        bound.bind(name, TypedValue::Absent);
    }
}

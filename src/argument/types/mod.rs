//! Argument types: one casting strategy per value kind.
//!
//! Every type implements the three-phase [`ArgumentType`] contract:
//! `validate` inspects the raw value, `transform` turns it into a
//! [`TypedValue`], and `post_transform_validation` may still reject a
//! structurally valid value. New kinds are added by implementing the trait;
//! the resolver never needs to change.

mod boolean;
mod channel;
mod duration;
mod member;
mod numeric;
mod role;
mod snowflake;
mod text;
mod user;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::argument::domain::{
    CastingConfig, ErrorKind, InvocationContext, MentionKind, RawValue, Rejection, Snowflake,
    TypedValue,
};
use crate::argument::ports::{Directory, DirectoryError};

pub use boolean::BooleanArgument;
pub use channel::ChannelArgument;
pub use duration::DurationArgument;
pub use member::MemberArgument;
pub use numeric::{IntegerArgument, NumberArgument};
pub use role::RoleArgument;
pub use snowflake::SnowflakeArgument;
pub use text::{RestStringArgument, StringArgument};
pub use user::UserArgument;

const REQUIRED_MESSAGE: &str = "You must provide a value for `{{ name }}`.";

const CHOICE_MESSAGE: &str =
    "`{{ name }}` must be one of: {{ choices | join(', ') }}.";

const LENGTH_RANGE_MESSAGE: &str = concat!(
    "{% if min is not none and max is not none %}",
    "`{{ name }}` must be between {{ min }} and {{ max }} characters long.",
    "{% elif max is not none %}`{{ name }}` must be at most {{ max }} characters long.",
    "{% else %}`{{ name }}` must be at least {{ min }} characters long.{% endif %}",
);

const VALUE_RANGE_MESSAGE: &str = concat!(
    "{% if min is not none and max is not none %}",
    "`{{ name }}` must be between {{ min }} and {{ max }}.",
    "{% elif max is not none %}`{{ name }}` must be at most {{ max }}.",
    "{% else %}`{{ name }}` must be at least {{ min }}.{% endif %}",
);

/// The value kind an argument type casts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    /// Single-token text.
    String,
    /// Remainder of the input as text.
    RestString,
    /// Signed integer.
    Integer,
    /// Floating-point number.
    Number,
    /// Boolean flag.
    Boolean,
    /// Bare identifier.
    Snowflake,
    /// Platform user.
    User,
    /// Guild member.
    Member,
    /// Channel.
    Channel,
    /// Guild role.
    Role,
    /// Length of time.
    Duration,
}

impl ArgumentKind {
    /// Returns the canonical snake-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::RestString => "rest_string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Snowflake => "snowflake",
            Self::User => "user",
            Self::Member => "member",
            Self::Channel => "channel",
            Self::Role => "role",
            Self::Duration => "duration",
        }
    }
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much legacy input an argument type consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extent {
    /// Exactly one token.
    Single,
    /// Everything from the current token to the end of the message.
    Rest,
}

/// Outcome of a failed casting phase.
#[derive(Debug, Clone, Error)]
pub enum CastError {
    /// The input was rejected; reported to the user.
    #[error("argument rejected: {}", .0.kind())]
    Rejected(Rejection),

    /// A directory lookup failed; propagated to the caller unchanged.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl From<Rejection> for CastError {
    fn from(rejection: Rejection) -> Self {
        Self::Rejected(rejection)
    }
}

/// Shared state visible to every phase of one cast.
#[derive(Clone, Copy)]
pub struct CastContext<'a> {
    invocation: &'a InvocationContext,
    directory: &'a dyn Directory,
    config: &'a CastingConfig,
    position: usize,
    slot: &'a str,
}

impl<'a> CastContext<'a> {
    /// Creates a context positioned at the first slot.
    #[must_use]
    pub const fn new(
        invocation: &'a InvocationContext,
        directory: &'a dyn Directory,
        config: &'a CastingConfig,
    ) -> Self {
        Self {
            invocation,
            directory,
            config,
            position: 0,
            slot: "",
        }
    }

    /// Returns a copy positioned at a specific slot.
    #[must_use]
    pub const fn at(self, position: usize, slot: &'a str) -> Self {
        Self {
            position,
            slot,
            ..self
        }
    }

    /// Returns the invocation context.
    #[must_use]
    pub const fn invocation(&self) -> &'a InvocationContext {
        self.invocation
    }

    /// Returns the directory port.
    #[must_use]
    pub const fn directory(&self) -> &'a dyn Directory {
        self.directory
    }

    /// Returns the casting configuration.
    #[must_use]
    pub const fn config(&self) -> &'a CastingConfig {
        self.config
    }

    /// Returns the zero-based slot index being cast.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the primary name of the slot being cast.
    #[must_use]
    pub const fn slot(&self) -> &'a str {
        self.slot
    }
}

/// Casting strategy for one argument kind.
///
/// Phases run strictly in order and a failing phase stops the cast. Types
/// are shared read-only across concurrent invocations.
#[async_trait]
pub trait ArgumentType: fmt::Debug + Send + Sync {
    /// Returns the kind of value produced.
    fn kind(&self) -> ArgumentKind;

    /// Returns how much legacy input the type consumes.
    fn extent(&self) -> Extent {
        Extent::Single
    }

    /// Returns the default message template for a failure kind.
    fn default_message(&self, kind: ErrorKind) -> Option<&'static str> {
        shared_message(kind)
    }

    /// Identifies the type and its configuration for cast caching.
    fn fingerprint(&self) -> String {
        format!("{self:?}")
    }

    /// Checks the raw value before transformation.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] when the raw value is syntactically invalid.
    fn validate(&self, _raw: &RawValue, _cx: &CastContext<'_>) -> Result<(), Rejection> {
        Ok(())
    }

    /// Converts the raw value into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`CastError::Rejected`] when the value cannot be interpreted
    /// as this kind, or [`CastError::Directory`] when a lookup fails.
    async fn transform(&self, raw: &RawValue, cx: &CastContext<'_>)
    -> Result<TypedValue, CastError>;

    /// Checks the typed value after transformation.
    ///
    /// # Errors
    ///
    /// Returns [`CastError::Rejected`] when the value is unacceptable, or
    /// [`CastError::Directory`] when a lookup fails.
    async fn post_transform_validation(
        &self,
        _value: &TypedValue,
        _cx: &CastContext<'_>,
    ) -> Result<(), CastError> {
        Ok(())
    }
}

/// Messages every argument type falls back to.
pub(crate) const fn shared_message(kind: ErrorKind) -> Option<&'static str> {
    match kind {
        ErrorKind::Required => Some(REQUIRED_MESSAGE),
        ErrorKind::InvalidChoice => Some(CHOICE_MESSAGE),
        ErrorKind::InvalidType | ErrorKind::InvalidRange | ErrorKind::SyntaxError => None,
    }
}

/// Extracts an identifier from text or integer input, unwrapping mentions of
/// the given kind when the configuration allows them.
fn reference_id(raw: &RawValue, mention: MentionKind, cx: &CastContext<'_>) -> Option<Snowflake> {
    match raw {
        RawValue::Text(text) => reference_from_text(text.trim(), &[mention], cx.config()),
        RawValue::Integer(value) => reference_from_text(&value.to_string(), &[], cx.config()),
        RawValue::Number(_)
        | RawValue::Boolean(_)
        | RawValue::User(_)
        | RawValue::Member(_)
        | RawValue::Channel(_)
        | RawValue::Role(_) => None,
    }
}

fn reference_from_text(
    text: &str,
    mentions: &[MentionKind],
    config: &CastingConfig,
) -> Option<Snowflake> {
    let inner = if config.accept_mentions {
        mentions
            .iter()
            .find_map(|mention| mention.strip(text))
            .unwrap_or(text)
    } else {
        text
    };
    Snowflake::parse_with_bounds(
        inner,
        config.min_snowflake_digits,
        config.max_snowflake_digits,
    )
    .ok()
}

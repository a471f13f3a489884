//! Error model for argument casting and overload registration.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::RuleName;

/// Closed set of reasons a single argument can fail to cast.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required argument was not supplied.
    Required,
    /// The value cannot be interpreted as the argument's kind.
    InvalidType,
    /// The value falls outside a configured numeric or length bound.
    InvalidRange,
    /// The value is not one of the configured choices.
    InvalidChoice,
    /// The raw input is malformed (unterminated quotes, bad grammar).
    SyntaxError,
}

impl ErrorKind {
    /// Returns the canonical snake-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::InvalidType => "invalid_type",
            Self::InvalidRange => "invalid_range",
            Self::InvalidChoice => "invalid_choice",
            Self::SyntaxError => "syntax_error",
        }
    }

    /// Returns a short human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Required => "missing value",
            Self::InvalidType => "invalid value",
            Self::InvalidRange => "value out of range",
            Self::InvalidChoice => "invalid choice",
            Self::SyntaxError => "syntax error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User-facing casting error handed to the response renderer.
///
/// Values are constructed once by the resolver and never mutated. The
/// `position` is the zero-based index of the failing slot within the
/// overload that produced the error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ArgumentError {
    message: String,
    position: usize,
    kind: ErrorKind,
}

impl ArgumentError {
    /// Creates an argument error.
    #[must_use]
    pub fn new(message: impl Into<String>, position: usize, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            position,
            kind,
        }
    }

    /// Returns the rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the zero-based slot index.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the failure kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// A failure raised by one casting phase before it is attributed to a slot.
///
/// Rejections carry no position or slot name; the resolver turns them into
/// an [`ArgumentError`] using the slot's message overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    kind: ErrorKind,
    rule: Option<RuleName>,
    message: Option<String>,
}

impl Rejection {
    /// Creates a rejection of the given kind.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            rule: None,
            message: None,
        }
    }

    /// Creates a rejection raised by a declarative rule.
    #[must_use]
    pub const fn for_rule(kind: ErrorKind, rule: RuleName) -> Self {
        Self {
            kind,
            rule: Some(rule),
            message: None,
        }
    }

    /// Shorthand for an [`ErrorKind::InvalidType`] rejection.
    #[must_use]
    pub const fn invalid_type() -> Self {
        Self::new(ErrorKind::InvalidType)
    }

    /// Shorthand for an [`ErrorKind::SyntaxError`] rejection.
    #[must_use]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::SyntaxError)
    }

    /// Attaches a message template specific to this failure.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the failure kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the rule that raised the failure, if any.
    #[must_use]
    pub const fn rule(&self) -> Option<RuleName> {
        self.rule
    }

    /// Returns the failure-specific message template, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Errors raised while registering slots and overloads.
///
/// These are configuration faults: hosts treat them as fatal at startup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// A command declared no overloads.
    #[error("at least one overload is required")]
    NoOverloads,

    /// A slot declared no names.
    #[error("slot {position} must declare at least one name")]
    MissingSlotName {
        /// Slot index.
        position: usize,
    },

    /// A slot name is not a valid identifier.
    #[error("invalid slot name '{0}': expected [a-z0-9_-] characters")]
    InvalidSlotName(String),

    /// Two slots of one overload share a name.
    #[error("duplicate slot name '{0}'")]
    DuplicateSlotName(String),

    /// A slot declared no candidate argument types.
    #[error("slot '{name}' at position {position} must declare at least one argument type")]
    MissingCandidates {
        /// Slot index.
        position: usize,
        /// Primary slot name.
        name: String,
    },

    /// The name list length matches neither one nor the candidate count.
    #[error(
        "slot '{name}' declares {names} names for {candidates} argument types; expected 1 or {candidates}"
    )]
    NameCountMismatch {
        /// Primary slot name.
        name: String,
        /// Number of declared names.
        names: usize,
        /// Number of candidate argument types.
        candidates: usize,
    },

    /// A rest-of-input argument appears before the final slot.
    #[error("rest-of-input argument in slot '{name}' at position {position} must be the final slot")]
    RestNotLast {
        /// Slot index.
        position: usize,
        /// Primary slot name.
        name: String,
    },

    /// A slot mixes rest-of-input candidates with single-token ones.
    #[error("slot '{0}' mixes rest-of-input and single-token candidates")]
    MixedExtents(String),

    /// A range rule has its bounds inverted.
    #[error("slot '{name}' declares range:min {min} greater than range:max {max}")]
    InvertedRange {
        /// Primary slot name.
        name: String,
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },

    /// A choices rule lists nothing.
    #[error("slot '{0}' declares an empty choices rule")]
    EmptyChoices(String),

    /// A message override does not compile as a template.
    #[error("invalid message template for slot '{name}': {reason}")]
    InvalidTemplate {
        /// Primary slot name.
        name: String,
        /// Compiler diagnostic.
        reason: String,
    },
}

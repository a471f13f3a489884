//! Declarative per-slot constraints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one declarative rule, used to key message overrides.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum RuleName {
    /// Lower bound on length or value.
    #[serde(rename = "range:min")]
    RangeMin,
    /// Upper bound on length or value.
    #[serde(rename = "range:max")]
    RangeMax,
    /// Enumerated set of accepted raw values.
    #[serde(rename = "choices")]
    Choices,
}

impl RuleName {
    /// Returns the canonical rule identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RangeMin => "range:min",
            Self::RangeMax => "range:max",
            Self::Choices => "choices",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constraints attached to a slot, independent of its argument types.
///
/// Range bounds apply to string length, numeric value, or whole seconds of a
/// duration. Choices apply to the raw value's textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rules {
    min: Option<i64>,
    max: Option<i64>,
    choices: Option<Vec<String>>,
}

impl Rules {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive lower bound.
    #[must_use]
    pub const fn with_min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use]
    pub const fn with_max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Restricts raw values to the given choices.
    #[must_use]
    pub fn with_choices(mut self, choices: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn min(&self) -> Option<i64> {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn max(&self) -> Option<i64> {
        self.max
    }

    /// Returns the accepted choices, if restricted.
    #[must_use]
    pub fn choices(&self) -> Option<&[String]> {
        self.choices.as_deref()
    }

    /// Returns whether any rule is configured.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.choices.is_none()
    }
}

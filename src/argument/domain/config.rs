//! Tunables for argument casting.

use serde::{Deserialize, Serialize};

use super::entity::{MAX_SNOWFLAKE_DIGITS, MIN_SNOWFLAKE_DIGITS};

/// Configuration shared by every cast in a resolver.
///
/// Hosts usually embed this in their own configuration file; every field
/// falls back to its default when omitted.
///
/// # Examples
///
/// ```
/// use chatargs::argument::domain::CastingConfig;
///
/// let config = CastingConfig::default();
/// assert!(config.accept_mentions);
/// assert!(!config.case_sensitive_choices);
///
/// let strict = CastingConfig::strict();
/// assert!(strict.case_sensitive_choices);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastingConfig {
    /// Whether `choices` rules compare raw values case-sensitively.
    pub case_sensitive_choices: bool,
    /// Whether reference arguments accept `<@id>`-style mentions.
    pub accept_mentions: bool,
    /// Shortest accepted identifier, in digits.
    pub min_snowflake_digits: usize,
    /// Longest accepted identifier, in digits.
    pub max_snowflake_digits: usize,
}

impl Default for CastingConfig {
    fn default() -> Self {
        Self {
            case_sensitive_choices: false,
            accept_mentions: true,
            min_snowflake_digits: MIN_SNOWFLAKE_DIGITS,
            max_snowflake_digits: MAX_SNOWFLAKE_DIGITS,
        }
    }
}

impl CastingConfig {
    /// Creates a configuration with exact-match choices.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            case_sensitive_choices: true,
            ..Self::default()
        }
    }

    /// Sets choice case sensitivity.
    #[must_use]
    pub const fn with_case_sensitive_choices(mut self, enabled: bool) -> Self {
        self.case_sensitive_choices = enabled;
        self
    }

    /// Sets mention acceptance.
    #[must_use]
    pub const fn with_mentions(mut self, enabled: bool) -> Self {
        self.accept_mentions = enabled;
        self
    }
}

//! Raw input values and the typed values they cast to.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Channel, Member, Role, Snowflake, User};

/// One weakly-typed input value.
///
/// Legacy invocations only ever produce [`RawValue::Text`]. Interactive
/// invocations carry whatever the platform already parsed, including
/// resolved entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RawValue {
    /// Free text.
    Text(String),
    /// Platform integer option.
    Integer(i64),
    /// Platform number option.
    Number(f64),
    /// Platform boolean option.
    Boolean(bool),
    /// Resolved user reference.
    User(User),
    /// Resolved guild member reference.
    Member(Member),
    /// Resolved channel reference.
    Channel(Channel),
    /// Resolved role reference.
    Role(Role),
}

impl RawValue {
    /// Creates a text value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns the text when this is a [`RawValue::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the identifier of an entity reference.
    #[must_use]
    pub const fn entity_id(&self) -> Option<Snowflake> {
        match self {
            Self::User(user) => Some(user.id),
            Self::Member(member) => Some(member.user.id),
            Self::Channel(channel) => Some(channel.id),
            Self::Role(role) => Some(role.id),
            Self::Text(_) | Self::Integer(_) | Self::Number(_) | Self::Boolean(_) => None,
        }
    }

    /// Renders the value as text; entities render as their identifier.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Number(value) => value.to_string(),
            Self::Boolean(value) => value.to_string(),
            Self::User(_) | Self::Member(_) | Self::Channel(_) | Self::Role(_) => self
                .entity_id()
                .map(|id| id.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Named options supplied whole by the platform for an interactive command.
///
/// Names are stored lowercased, so lookups ignore case, and iterate in name
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, RawValue>", into = "BTreeMap<String, RawValue>")]
pub struct OptionBag(BTreeMap<String, RawValue>);

impl OptionBag {
    /// Creates an empty option bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option, returning the bag.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: RawValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts an option; names are matched case-insensitively.
    pub fn insert(&mut self, name: impl Into<String>, value: RawValue) -> Option<RawValue> {
        self.0.insert(name.into().to_ascii_lowercase(), value)
    }

    /// Looks up an option by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.0.get(&name.to_ascii_lowercase())
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no options were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates options in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<N: Into<String>> FromIterator<(N, RawValue)> for OptionBag {
    fn from_iter<T: IntoIterator<Item = (N, RawValue)>>(iter: T) -> Self {
        let mut bag = Self::new();
        for (name, value) in iter {
            bag.insert(name, value);
        }
        bag
    }
}

impl From<BTreeMap<String, RawValue>> for OptionBag {
    fn from(options: BTreeMap<String, RawValue>) -> Self {
        options.into_iter().collect()
    }
}

impl From<OptionBag> for BTreeMap<String, RawValue> {
    fn from(bag: OptionBag) -> Self {
        bag.0
    }
}

/// A fully cast argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// An optional argument that was not supplied.
    Absent,
    /// Text.
    String(String),
    /// Signed integer.
    Integer(i64),
    /// Finite floating-point number.
    Number(f64),
    /// Boolean flag.
    Boolean(bool),
    /// Bare identifier.
    Snowflake(Snowflake),
    /// Resolved user.
    User(User),
    /// Resolved guild member.
    Member(Member),
    /// Resolved channel.
    Channel(Channel),
    /// Resolved role.
    Role(Role),
    /// Length of time.
    Duration(TimeDelta),
}

impl TypedValue {
    /// Returns whether this is the absent marker.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the text of a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns an integer value.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns a number value.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the user of a user or member value.
    #[must_use]
    pub const fn as_user(&self) -> Option<&User> {
        match self {
            Self::User(user) => Some(user),
            Self::Member(member) => Some(&member.user),
            _ => None,
        }
    }

    /// Returns a member value.
    #[must_use]
    pub const fn as_member(&self) -> Option<&Member> {
        match self {
            Self::Member(member) => Some(member),
            _ => None,
        }
    }

    /// Returns a channel value.
    #[must_use]
    pub const fn as_channel(&self) -> Option<&Channel> {
        match self {
            Self::Channel(channel) => Some(channel),
            _ => None,
        }
    }

    /// Returns a role value.
    #[must_use]
    pub const fn as_role(&self) -> Option<&Role> {
        match self {
            Self::Role(role) => Some(role),
            _ => None,
        }
    }

    /// Returns a duration value.
    #[must_use]
    pub const fn as_duration(&self) -> Option<TimeDelta> {
        match self {
            Self::Duration(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the identifier of a snowflake or entity value.
    #[must_use]
    pub const fn identity(&self) -> Option<Snowflake> {
        match self {
            Self::Snowflake(id) => Some(*id),
            Self::User(user) => Some(user.id),
            Self::Member(member) => Some(member.user.id),
            Self::Channel(channel) => Some(channel.id),
            Self::Role(role) => Some(role.id),
            Self::Absent
            | Self::String(_)
            | Self::Integer(_)
            | Self::Number(_)
            | Self::Boolean(_)
            | Self::Duration(_) => None,
        }
    }
}

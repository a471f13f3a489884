//! Bound argument record produced by a successful resolution.

use chrono::TimeDelta;
use std::collections::BTreeMap;

use super::{Channel, Member, Role, Snowflake, TypedValue, User};

/// Mapping from slot name to its cast value for one invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundArguments {
    overload: usize,
    values: BTreeMap<String, TypedValue>,
}

impl BoundArguments {
    pub(crate) fn new(overload: usize) -> Self {
        Self {
            overload,
            values: BTreeMap::new(),
        }
    }

    pub(crate) fn bind(&mut self, name: &str, value: TypedValue) {
        self.values.insert(name.to_owned(), value);
    }

    /// Returns the index of the overload that matched.
    #[must_use]
    pub const fn overload(&self) -> usize {
        self.overload
    }

    /// Returns the value bound under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypedValue> {
        self.values.get(name)
    }

    /// Returns whether `name` is bound to a present value.
    #[must_use]
    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_absent())
    }

    /// Returns a string argument.
    #[must_use]
    pub fn string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(TypedValue::as_str)
    }

    /// Returns an integer argument.
    #[must_use]
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(TypedValue::as_integer)
    }

    /// Returns a number argument.
    #[must_use]
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(TypedValue::as_number)
    }

    /// Returns a boolean argument.
    #[must_use]
    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(TypedValue::as_bool)
    }

    /// Returns the identifier of a snowflake or entity argument.
    #[must_use]
    pub fn snowflake(&self, name: &str) -> Option<Snowflake> {
        self.get(name).and_then(TypedValue::identity)
    }

    /// Returns a user argument; member arguments yield their user.
    #[must_use]
    pub fn user(&self, name: &str) -> Option<&User> {
        self.get(name).and_then(TypedValue::as_user)
    }

    /// Returns a member argument.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.get(name).and_then(TypedValue::as_member)
    }

    /// Returns a channel argument.
    #[must_use]
    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.get(name).and_then(TypedValue::as_channel)
    }

    /// Returns a role argument.
    #[must_use]
    pub fn role(&self, name: &str) -> Option<&Role> {
        self.get(name).and_then(TypedValue::as_role)
    }

    /// Returns a duration argument.
    #[must_use]
    pub fn duration(&self, name: &str) -> Option<TimeDelta> {
        self.get(name).and_then(TypedValue::as_duration)
    }

    /// Returns the number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether nothing was bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates bound values in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypedValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

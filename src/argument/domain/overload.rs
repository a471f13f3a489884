//! Overloads: the accepted call shapes of a command.

use std::collections::HashSet;

use super::{SignatureError, SlotDefinition};

/// One accepted sequence of slots.
///
/// Construction validates the slots, so an `Overload` in hand is always
/// well formed.
#[derive(Debug, Clone)]
pub struct Overload {
    slots: Vec<SlotDefinition>,
}

impl Overload {
    /// Validates and builds an overload.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError`] when a slot is malformed, two slots share
    /// a name, or a rest-of-input argument is not in the final slot.
    pub fn new(slots: impl IntoIterator<Item = SlotDefinition>) -> Result<Self, SignatureError> {
        let collected: Vec<SlotDefinition> = slots.into_iter().collect();
        let last = collected.len().saturating_sub(1);
        let mut seen = HashSet::new();
        for (position, slot) in collected.iter().enumerate() {
            slot.validate(position, position == last)?;
            for name in slot.names() {
                if !seen.insert(name.as_str()) {
                    return Err(SignatureError::DuplicateSlotName(name.clone()));
                }
            }
        }
        Ok(Self { slots: collected })
    }

    /// Creates an overload that takes no arguments.
    #[must_use]
    pub const fn empty() -> Self {
        Self { slots: Vec::new() }
    }

    /// Returns the slots in declaration order.
    #[must_use]
    pub fn slots(&self) -> &[SlotDefinition] {
        &self.slots
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether the overload takes no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// The non-empty, ordered overload list of one command.
#[derive(Debug, Clone)]
pub struct Overloads(Vec<Overload>);

impl Overloads {
    /// Builds an overload list.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::NoOverloads`] when the list is empty.
    pub fn new(overloads: impl IntoIterator<Item = Overload>) -> Result<Self, SignatureError> {
        let collected: Vec<Overload> = overloads.into_iter().collect();
        if collected.is_empty() {
            return Err(SignatureError::NoOverloads);
        }
        Ok(Self(collected))
    }

    /// Wraps a single overload.
    #[must_use]
    pub fn single(overload: Overload) -> Self {
        Self(vec![overload])
    }

    /// Returns the overloads in declaration order.
    #[must_use]
    pub fn as_slice(&self) -> &[Overload] {
        &self.0
    }

    /// Returns the number of overloads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: an overload list holds at least one overload.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates overloads in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Overload> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Overloads {
    type Item = &'a Overload;
    type IntoIter = std::slice::Iter<'a, Overload>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

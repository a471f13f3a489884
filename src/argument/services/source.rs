//! Raw value sources.
//!
//! The resolver walks an overload's slots against a [`RawValueSource`] and
//! never looks at how the values were obtained. Legacy sources hand out
//! tokens; interactive sources look options up by slot name.

use crate::argument::domain::{InvocationMode, OptionBag, RawValue, SlotDefinition};
use crate::argument::parsing::{QuoteFault, Token, tokenize};

/// Outcome of asking a source for a slot's raw value.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch {
    /// A value was found and `consumed` input units were used.
    Value {
        /// The raw value for the slot.
        raw: RawValue,
        /// How far the cursor advances.
        consumed: usize,
    },
    /// No value was supplied for the slot.
    Missing,
    /// The next legacy token is malformed.
    Malformed {
        /// The token text as far as it could be read.
        text: String,
        /// The quoting problem.
        fault: QuoteFault,
    },
}

/// Provides raw slot values for one invocation.
pub trait RawValueSource: Send + Sync {
    /// Returns the invocation mode the source serves.
    fn mode(&self) -> InvocationMode;

    /// Fetches the raw value for `slot` with the cursor at `cursor`.
    fn fetch(&self, slot: &SlotDefinition, cursor: usize) -> Fetch;
}

/// Token-backed source for free-text invocations.
///
/// A rest-of-input slot receives every unconsumed token's value joined by
/// single spaces.
#[derive(Debug, Clone)]
pub struct LegacySource {
    tokens: Vec<Token>,
}

impl LegacySource {
    /// Tokenizes a command body.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            tokens: tokenize(input),
        }
    }

    /// Returns the tokens of the body.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    fn remainder(&self, cursor: usize) -> Fetch {
        let rest = self.tokens.get(cursor..).unwrap_or_default();
        if rest.is_empty() {
            return Fetch::Missing;
        }
        if let Some(malformed) = rest.iter().find_map(malformed) {
            return malformed;
        }
        let joined = rest.iter().map(Token::value).collect::<Vec<_>>().join(" ");
        Fetch::Value {
            raw: RawValue::text(joined),
            consumed: rest.len(),
        }
    }
}

fn malformed(token: &Token) -> Option<Fetch> {
    token.fault().map(|fault| Fetch::Malformed {
        text: token.value().to_owned(),
        fault,
    })
}

impl RawValueSource for LegacySource {
    fn mode(&self) -> InvocationMode {
        InvocationMode::Legacy
    }

    fn fetch(&self, slot: &SlotDefinition, cursor: usize) -> Fetch {
        if slot.reads_rest() {
            return self.remainder(cursor);
        }
        match self.tokens.get(cursor) {
            None => Fetch::Missing,
            Some(token) => malformed(token).unwrap_or_else(|| Fetch::Value {
                raw: RawValue::text(token.value()),
                consumed: 1,
            }),
        }
    }
}

/// Option-bag source for interactive invocations.
///
/// Options are looked up by each of the slot's names in order. The cursor
/// is ignored.
#[derive(Debug, Clone, Copy)]
pub struct InteractionSource<'a> {
    options: &'a OptionBag,
}

impl<'a> InteractionSource<'a> {
    /// Wraps the platform's option bag.
    #[must_use]
    pub const fn new(options: &'a OptionBag) -> Self {
        Self { options }
    }
}

impl RawValueSource for InteractionSource<'_> {
    fn mode(&self) -> InvocationMode {
        InvocationMode::Interactive
    }

    fn fetch(&self, slot: &SlotDefinition, _cursor: usize) -> Fetch {
        slot.names()
            .iter()
            .find_map(|name| self.options.get(name))
            .map_or(Fetch::Missing, |raw| Fetch::Value {
                raw: raw.clone(),
                consumed: 0,
            })
    }
}

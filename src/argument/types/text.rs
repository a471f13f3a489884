//! Text argument types.

use async_trait::async_trait;

use super::{
    ArgumentKind, ArgumentType, CastContext, CastError, Extent, LENGTH_RANGE_MESSAGE,
    shared_message,
};
use crate::argument::domain::{ErrorKind, RawValue, Rejection, TypedValue};

/// A single token of text.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringArgument;

#[async_trait]
impl ArgumentType for StringArgument {
    fn kind(&self) -> ArgumentKind {
        ArgumentKind::String
    }

    fn default_message(&self, kind: ErrorKind) -> Option<&'static str> {
        text_message(kind)
    }

    async fn transform(
        &self,
        raw: &RawValue,
        _cx: &CastContext<'_>,
    ) -> Result<TypedValue, CastError> {
        text_value(raw, false)
    }
}

/// Everything from the current position to the end of the input.
///
/// Legacy invocations receive every remaining token, joined by single spaces.
/// Interactive invocations read the single matching option. Only legal in
/// the final slot of an overload.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestStringArgument;

#[async_trait]
impl ArgumentType for RestStringArgument {
    fn kind(&self) -> ArgumentKind {
        ArgumentKind::RestString
    }

    fn extent(&self) -> Extent {
        Extent::Rest
    }

    fn default_message(&self, kind: ErrorKind) -> Option<&'static str> {
        text_message(kind)
    }

    async fn transform(
        &self,
        raw: &RawValue,
        _cx: &CastContext<'_>,
    ) -> Result<TypedValue, CastError> {
        text_value(raw, true)
    }
}

const fn text_message(kind: ErrorKind) -> Option<&'static str> {
    match kind {
        ErrorKind::InvalidRange => Some(LENGTH_RANGE_MESSAGE),
        ErrorKind::InvalidType => Some("`{{ name }}` must be text."),
        ErrorKind::Required | ErrorKind::InvalidChoice | ErrorKind::SyntaxError => {
            shared_message(kind)
        }
    }
}

fn text_value(raw: &RawValue, trim: bool) -> Result<TypedValue, CastError> {
    match raw {
        RawValue::Text(text) if trim => Ok(TypedValue::String(text.trim().to_owned())),
        RawValue::Text(text) => Ok(TypedValue::String(text.clone())),
        RawValue::Integer(_) | RawValue::Number(_) | RawValue::Boolean(_) => {
            Ok(TypedValue::String(raw.render()))
        }
        RawValue::User(_) | RawValue::Member(_) | RawValue::Channel(_) | RawValue::Role(_) => {
            Err(Rejection::invalid_type().into())
        }
    }
}

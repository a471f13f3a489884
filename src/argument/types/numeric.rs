//! Integer and number argument types.

use async_trait::async_trait;
use std::num::IntErrorKind;

use super::{
    ArgumentKind, ArgumentType, CastContext, CastError, VALUE_RANGE_MESSAGE, shared_message,
};
use crate::argument::domain::{ErrorKind, RawValue, Rejection, TypedValue};

const INTEGER_OVERFLOW_MESSAGE: &str = "`{{ name }}` is too large to be a number.";

/// A signed 64-bit integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerArgument;

#[async_trait]
impl ArgumentType for IntegerArgument {
    fn kind(&self) -> ArgumentKind {
        ArgumentKind::Integer
    }

    fn default_message(&self, kind: ErrorKind) -> Option<&'static str> {
        match kind {
            ErrorKind::InvalidType => Some("`{{ name }}` must be a whole number."),
            ErrorKind::InvalidRange => Some(VALUE_RANGE_MESSAGE),
            ErrorKind::Required | ErrorKind::InvalidChoice | ErrorKind::SyntaxError => {
                shared_message(kind)
            }
        }
    }

    async fn transform(
        &self,
        raw: &RawValue,
        _cx: &CastContext<'_>,
    ) -> Result<TypedValue, CastError> {
        match raw {
            RawValue::Integer(value) => Ok(TypedValue::Integer(*value)),
            RawValue::Text(text) => parse_integer(text.trim()).map(TypedValue::Integer),
            RawValue::Number(_)
            | RawValue::Boolean(_)
            | RawValue::User(_)
            | RawValue::Member(_)
            | RawValue::Channel(_)
            | RawValue::Role(_) => Err(Rejection::invalid_type().into()),
        }
    }
}

fn parse_integer(text: &str) -> Result<i64, CastError> {
    text.parse::<i64>().map_err(|error| {
        let rejection = Rejection::invalid_type();
        match error.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                rejection.with_message(INTEGER_OVERFLOW_MESSAGE).into()
            }
            _ => rejection.into(),
        }
    })
}

/// A finite floating-point number.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberArgument;

#[async_trait]
impl ArgumentType for NumberArgument {
    fn kind(&self) -> ArgumentKind {
        ArgumentKind::Number
    }

    fn default_message(&self, kind: ErrorKind) -> Option<&'static str> {
        match kind {
            ErrorKind::InvalidType => Some("`{{ name }}` must be a number."),
            ErrorKind::InvalidRange => Some(VALUE_RANGE_MESSAGE),
            ErrorKind::Required | ErrorKind::InvalidChoice | ErrorKind::SyntaxError => {
                shared_message(kind)
            }
        }
    }

    async fn transform(
        &self,
        raw: &RawValue,
        _cx: &CastContext<'_>,
    ) -> Result<TypedValue, CastError> {
        let value = match raw {
            RawValue::Number(value) => *value,
            RawValue::Integer(value) => widen(*value),
            RawValue::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| Rejection::invalid_type())?,
            RawValue::Boolean(_)
            | RawValue::User(_)
            | RawValue::Member(_)
            | RawValue::Channel(_)
            | RawValue::Role(_) => return Err(Rejection::invalid_type().into()),
        };
        if value.is_finite() {
            Ok(TypedValue::Number(value))
        } else {
            Err(Rejection::invalid_type().into())
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "integer options widen to the number kind like their text form does"
)]
fn widen(value: i64) -> f64 {
    value as f64
}

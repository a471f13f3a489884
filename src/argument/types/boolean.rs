//! Boolean argument type.

use async_trait::async_trait;

use super::{ArgumentKind, ArgumentType, CastContext, CastError, shared_message};
use crate::argument::domain::{ErrorKind, RawValue, Rejection, TypedValue};

/// A yes/no flag.
///
/// Text accepts `true`/`false`, `yes`/`no`, `on`/`off` and `1`/`0`, in any
/// case. Integer options accept `1` and `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanArgument;

#[async_trait]
impl ArgumentType for BooleanArgument {
    fn kind(&self) -> ArgumentKind {
        ArgumentKind::Boolean
    }

    fn default_message(&self, kind: ErrorKind) -> Option<&'static str> {
        match kind {
            ErrorKind::InvalidType => Some("`{{ name }}` must be true or false."),
            _ => shared_message(kind),
        }
    }

    async fn transform(
        &self,
        raw: &RawValue,
        _cx: &CastContext<'_>,
    ) -> Result<TypedValue, CastError> {
        let value = match raw {
            RawValue::Boolean(value) => Some(*value),
            RawValue::Integer(1) => Some(true),
            RawValue::Integer(0) => Some(false),
            RawValue::Text(text) => parse_flag(text.trim()),
            _ => None,
        };
        value
            .map(TypedValue::Boolean)
            .ok_or_else(|| Rejection::invalid_type().into())
    }
}

fn parse_flag(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

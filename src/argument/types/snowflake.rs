//! Bare identifier argument type.

use async_trait::async_trait;

use super::{
    ArgumentKind, ArgumentType, CastContext, CastError, reference_from_text, shared_message,
};
use crate::argument::domain::{ErrorKind, MentionKind, RawValue, Rejection, TypedValue};

/// An identifier that is not resolved against the directory.
///
/// Accepts any mention form, so it pairs with reference types as a fallback
/// for users who have left a guild or entities the directory cannot see.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnowflakeArgument;

#[async_trait]
impl ArgumentType for SnowflakeArgument {
    fn kind(&self) -> ArgumentKind {
        ArgumentKind::Snowflake
    }

    fn default_message(&self, kind: ErrorKind) -> Option<&'static str> {
        match kind {
            ErrorKind::InvalidType => Some("`{{ value }}` is not a valid ID."),
            _ => shared_message(kind),
        }
    }

    async fn transform(
        &self,
        raw: &RawValue,
        cx: &CastContext<'_>,
    ) -> Result<TypedValue, CastError> {
        let id = match raw {
            RawValue::Text(text) => reference_from_text(text.trim(), &MentionKind::ALL, cx.config()),
            RawValue::Integer(value) => reference_from_text(&value.to_string(), &[], cx.config()),
            RawValue::Number(_) | RawValue::Boolean(_) => None,
            RawValue::User(_) | RawValue::Member(_) | RawValue::Channel(_) | RawValue::Role(_) => {
                raw.entity_id()
            }
        };
        id.map(TypedValue::Snowflake)
            .ok_or_else(|| Rejection::invalid_type().into())
    }
}

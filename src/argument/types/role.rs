//! Role reference argument type.

use async_trait::async_trait;

use super::{ArgumentKind, ArgumentType, CastContext, CastError, reference_id, shared_message};
use crate::argument::domain::{ErrorKind, MentionKind, RawValue, Rejection, TypedValue};

/// A role of the invoking guild, resolved through the directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleArgument;

#[async_trait]
impl ArgumentType for RoleArgument {
    fn kind(&self) -> ArgumentKind {
        ArgumentKind::Role
    }

    fn default_message(&self, kind: ErrorKind) -> Option<&'static str> {
        match kind {
            ErrorKind::InvalidType => Some("`{{ value }}` is not a valid role mention or ID."),
            _ => shared_message(kind),
        }
    }

    async fn transform(
        &self,
        raw: &RawValue,
        cx: &CastContext<'_>,
    ) -> Result<TypedValue, CastError> {
        let guild_id = cx.invocation().guild_id().ok_or_else(|| {
            Rejection::invalid_type().with_message("`{{ name }}` can only be used inside a server.")
        })?;
        if let RawValue::Role(role) = raw
            && role.guild_id == guild_id
        {
            return Ok(TypedValue::Role(role.clone()));
        }
        let id = match raw {
            RawValue::Role(role) => role.id,
            _ => reference_id(raw, MentionKind::Role, cx).ok_or_else(Rejection::invalid_type)?,
        };
        cx.directory()
            .resolve_role(guild_id, id)
            .await?
            .map(TypedValue::Role)
            .ok_or_else(|| {
                Rejection::invalid_type()
                    .with_message("I couldn't find a role with ID `{{ value }}` in this server.")
                    .into()
            })
    }
}

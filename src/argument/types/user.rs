//! User reference argument type.

use async_trait::async_trait;

use super::{ArgumentKind, ArgumentType, CastContext, CastError, reference_id, shared_message};
use crate::argument::domain::{ErrorKind, MentionKind, RawValue, Rejection, TypedValue};

/// A platform user, resolved through the directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserArgument;

#[async_trait]
impl ArgumentType for UserArgument {
    fn kind(&self) -> ArgumentKind {
        ArgumentKind::User
    }

    fn default_message(&self, kind: ErrorKind) -> Option<&'static str> {
        match kind {
            ErrorKind::InvalidType => Some("`{{ value }}` is not a valid user mention or ID."),
            _ => shared_message(kind),
        }
    }

    async fn transform(
        &self,
        raw: &RawValue,
        cx: &CastContext<'_>,
    ) -> Result<TypedValue, CastError> {
        match raw {
            RawValue::User(user) => return Ok(TypedValue::User(user.clone())),
            RawValue::Member(member) => return Ok(TypedValue::User(member.user.clone())),
            _ => {}
        }
        let id = reference_id(raw, MentionKind::User, cx).ok_or_else(Rejection::invalid_type)?;
        cx.directory()
            .resolve_user(id)
            .await?
            .map(TypedValue::User)
            .ok_or_else(|| {
                Rejection::invalid_type()
                    .with_message("I couldn't find a user with ID `{{ value }}`.")
                    .into()
            })
    }
}

//! Guild member argument type.

use async_trait::async_trait;

use super::{ArgumentKind, ArgumentType, CastContext, CastError, reference_id, shared_message};
use crate::argument::domain::{ErrorKind, MentionKind, RawValue, Rejection, TypedValue};

const GUILD_ONLY_MESSAGE: &str = "`{{ name }}` can only be used inside a server.";
const NOT_FOUND_MESSAGE: &str = "I couldn't find a member with ID `{{ value }}` in this server.";
const NOT_TARGETABLE_MESSAGE: &str = "You don't have permission to target `{{ value }}`.";

/// A member of the invoking guild, resolved through the directory.
///
/// A *targetable* member argument also asks the directory whether the caller
/// may act on the resolved member, for moderation commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberArgument {
    targetable: bool,
}

impl MemberArgument {
    /// Creates a member argument without a permission check.
    #[must_use]
    pub const fn new() -> Self {
        Self { targetable: false }
    }

    /// Creates a member argument the caller must be allowed to act on.
    #[must_use]
    pub const fn targetable() -> Self {
        Self { targetable: true }
    }
}

#[async_trait]
impl ArgumentType for MemberArgument {
    fn kind(&self) -> ArgumentKind {
        ArgumentKind::Member
    }

    fn default_message(&self, kind: ErrorKind) -> Option<&'static str> {
        match kind {
            ErrorKind::InvalidType => Some("`{{ value }}` is not a valid member mention or ID."),
            _ => shared_message(kind),
        }
    }

    async fn transform(
        &self,
        raw: &RawValue,
        cx: &CastContext<'_>,
    ) -> Result<TypedValue, CastError> {
        let guild_id = cx
            .invocation()
            .guild_id()
            .ok_or_else(|| Rejection::invalid_type().with_message(GUILD_ONLY_MESSAGE))?;

        let id = match raw {
            RawValue::Member(member) if member.guild_id == guild_id => {
                return Ok(TypedValue::Member(member.clone()));
            }
            RawValue::Member(member) => member.user.id,
            RawValue::User(user) => user.id,
            RawValue::Text(_)
            | RawValue::Integer(_)
            | RawValue::Number(_)
            | RawValue::Boolean(_)
            | RawValue::Channel(_)
            | RawValue::Role(_) => {
                reference_id(raw, MentionKind::User, cx).ok_or_else(Rejection::invalid_type)?
            }
        };

        cx.directory()
            .resolve_member(guild_id, id)
            .await?
            .map(TypedValue::Member)
            .ok_or_else(|| {
                Rejection::invalid_type()
                    .with_message(NOT_FOUND_MESSAGE)
                    .into()
            })
    }

    async fn post_transform_validation(
        &self,
        value: &TypedValue,
        cx: &CastContext<'_>,
    ) -> Result<(), CastError> {
        let Some(member) = value.as_member().filter(|_| self.targetable) else {
            return Ok(());
        };
        let allowed = cx
            .directory()
            .can_target(member.guild_id, cx.invocation().caller(), member)
            .await?;
        if allowed {
            Ok(())
        } else {
            Err(Rejection::invalid_type()
                .with_message(NOT_TARGETABLE_MESSAGE)
                .into())
        }
    }
}

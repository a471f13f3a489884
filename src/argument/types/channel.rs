//! Channel reference argument type.

use async_trait::async_trait;

use super::{ArgumentKind, ArgumentType, CastContext, CastError, reference_id, shared_message};
use crate::argument::domain::{
    Channel, ChannelKind, ErrorKind, MentionKind, RawValue, Rejection, TypedValue,
};

const FOREIGN_CHANNEL_MESSAGE: &str = "`{{ value }}` is not a channel in this server.";

/// A channel, resolved through the directory and optionally restricted to
/// specific channel kinds.
///
/// Resolved channels must belong to the guild the command was invoked in.
#[derive(Debug, Clone, Default)]
pub struct ChannelArgument {
    kinds: Vec<ChannelKind>,
}

impl ChannelArgument {
    /// Creates a channel argument accepting every kind.
    #[must_use]
    pub const fn new() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Creates a channel argument restricted to the given kinds.
    #[must_use]
    pub fn of_kinds(kinds: impl IntoIterator<Item = ChannelKind>) -> Self {
        let mut collected: Vec<ChannelKind> = kinds.into_iter().collect();
        collected.dedup();
        Self { kinds: collected }
    }

    /// Returns the accepted kinds; empty means any kind.
    #[must_use]
    pub fn kinds(&self) -> &[ChannelKind] {
        &self.kinds
    }

    fn accepts(&self, channel: &Channel) -> bool {
        self.kinds.is_empty() || self.kinds.contains(&channel.kind)
    }

    fn wrong_kind(&self) -> Rejection {
        let names: Vec<&str> = self.kinds.iter().map(|kind| kind.as_str()).collect();
        Rejection::invalid_type().with_message(format!(
            "`{{{{ value }}}}` must be a {} channel.",
            names.join(" or ")
        ))
    }
}

#[async_trait]
impl ArgumentType for ChannelArgument {
    fn kind(&self) -> ArgumentKind {
        ArgumentKind::Channel
    }

    fn default_message(&self, kind: ErrorKind) -> Option<&'static str> {
        match kind {
            ErrorKind::InvalidType => Some("`{{ value }}` is not a valid channel mention or ID."),
            _ => shared_message(kind),
        }
    }

    async fn transform(
        &self,
        raw: &RawValue,
        cx: &CastContext<'_>,
    ) -> Result<TypedValue, CastError> {
        if let RawValue::Channel(channel) = raw {
            return Ok(TypedValue::Channel(channel.clone()));
        }
        let id =
            reference_id(raw, MentionKind::Channel, cx).ok_or_else(Rejection::invalid_type)?;
        cx.directory()
            .resolve_channel(id)
            .await?
            .map(TypedValue::Channel)
            .ok_or_else(|| {
                Rejection::invalid_type()
                    .with_message("I couldn't find a channel with ID `{{ value }}`.")
                    .into()
            })
    }

    async fn post_transform_validation(
        &self,
        value: &TypedValue,
        cx: &CastContext<'_>,
    ) -> Result<(), CastError> {
        let Some(channel) = value.as_channel() else {
            return Ok(());
        };
        if channel.guild_id != cx.invocation().guild_id() {
            return Err(Rejection::invalid_type()
                .with_message(FOREIGN_CHANNEL_MESSAGE)
                .into());
        }
        if !self.accepts(channel) {
            return Err(self.wrong_kind().into());
        }
        Ok(())
    }
}

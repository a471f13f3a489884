//! Prefix parsing for free-text command messages.

/// A chat message addressed to the bot, split into command name and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyMessage<'a> {
    name: String,
    body: &'a str,
}

impl<'a> LegacyMessage<'a> {
    /// Splits `<prefix><name> <body>` content.
    ///
    /// Returns `None` when the content does not start with `prefix` or no
    /// command name follows it. The name is lowercased; the body keeps its
    /// original spacing apart from the whitespace separating it from the
    /// name.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatargs::command::domain::LegacyMessage;
    ///
    /// let message = LegacyMessage::parse("!", "!Ban @someone spamming").expect("command");
    /// assert_eq!(message.name(), "ban");
    /// assert_eq!(message.body(), "@someone spamming");
    /// assert!(LegacyMessage::parse("!", "hello there").is_none());
    /// ```
    #[must_use]
    pub fn parse(prefix: &str, content: &'a str) -> Option<Self> {
        let rest = content.strip_prefix(prefix)?;
        let (name, body) = rest
            .split_once(char::is_whitespace)
            .map_or((rest, ""), |(name, body)| (name, body.trim_start()));
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_lowercase(),
            body,
        })
    }

    /// Returns the lowercased command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the argument body.
    #[must_use]
    pub const fn body(&self) -> &'a str {
        self.body
    }
}

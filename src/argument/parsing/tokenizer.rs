//! Legacy message tokenizer.
//!
//! Whitespace separates tokens. A token that opens with `"` or `'` runs to
//! the matching quote, and inside it a backslash escapes the next character.
//! Quotes in the middle of a bare token are literal, so `don't` stays one
//! token. Quoting problems do not abort tokenizing: the offending token is
//! marked with a [`QuoteFault`] and the slot that consumes it reports the
//! syntax error.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::argument::domain::{ArgumentError, ErrorKind};

/// Quoting problem detected in a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteFault {
    /// The input ended before the closing quote.
    Unterminated,
    /// The closing quote was followed directly by more text.
    Mismatched,
}

impl QuoteFault {
    /// Returns a human-readable description.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Unterminated => "a quote that is never closed",
            Self::Mismatched => "text directly after a closing quote",
        }
    }
}

/// One legacy argument token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    value: String,
    start: usize,
    fault: Option<QuoteFault>,
}

impl Token {
    /// Returns the token text with quotes and escapes removed.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the byte offset of the token in the tokenized input.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the quoting problem, if any.
    #[must_use]
    pub const fn fault(&self) -> Option<QuoteFault> {
        self.fault
    }

    /// Reports whether the token is well formed.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        self.fault.is_some()
    }
}

/// Splits input into tokens, marking malformed ones instead of failing.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, first)) = chars.peek() {
        if first.is_whitespace() {
            chars.next();
            continue;
        }
        let token = if matches!(first, '"' | '\'') {
            chars.next();
            read_quoted(&mut chars, start, first)
        } else {
            read_bare(&mut chars, start)
        };
        tokens.push(token);
    }

    tokens
}

/// Splits input into token values, rejecting any quoting problem.
///
/// # Errors
///
/// Returns a `SyntaxError` [`ArgumentError`] positioned at the index of the
/// first malformed token.
pub fn split_tokens(input: &str) -> Result<Vec<String>, ArgumentError> {
    let tokens = tokenize(input);
    if let Some((position, fault)) = tokens
        .iter()
        .enumerate()
        .find_map(|(index, token)| token.fault().map(|fault| (index, fault)))
    {
        return Err(ArgumentError::new(
            format!("Argument #{} contains {}.", position + 1, fault.describe()),
            position,
            ErrorKind::SyntaxError,
        ));
    }
    Ok(tokens.into_iter().map(|token| token.value).collect())
}

fn read_bare(chars: &mut Peekable<CharIndices<'_>>, start: usize) -> Token {
    let mut value = String::new();
    while let Some(&(_, character)) = chars.peek() {
        if character.is_whitespace() {
            break;
        }
        value.push(character);
        chars.next();
    }
    Token {
        value,
        start,
        fault: None,
    }
}

fn read_quoted(chars: &mut Peekable<CharIndices<'_>>, start: usize, quote: char) -> Token {
    let mut value = String::new();
    let mut escaped = false;
    let mut closed = false;

    for (_, character) in chars.by_ref() {
        if escaped {
            value.push(character);
            escaped = false;
        } else if character == '\\' {
            escaped = true;
        } else if character == quote {
            closed = true;
            break;
        } else {
            value.push(character);
        }
    }

    if !closed {
        return Token {
            value,
            start,
            fault: Some(QuoteFault::Unterminated),
        };
    }

    let trailing = read_bare(chars, start);
    if trailing.value.is_empty() {
        Token {
            value,
            start,
            fault: None,
        }
    } else {
        value.push_str(&trailing.value);
        Token {
            value,
            start,
            fault: Some(QuoteFault::Mismatched),
        }
    }
}

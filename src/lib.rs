//! Chatargs: argument casting and overload resolution for chat-bot commands.
//!
//! A command declares one or more overloads of typed argument slots. The
//! engine turns either a free-text message body or a platform's structured
//! option bag into a bound record of typed values, or into exactly one
//! user-facing error describing what went wrong and where.
//!
//! # Architecture
//!
//! Chatargs follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types, slot definitions and the error model
//! - **Ports**: Abstract trait interfaces for directory and registry lookups
//! - **Adapters**: In-memory implementations of the ports
//!
//! # Modules
//!
//! - [`argument`]: Argument types, rules, tokenizing and overload resolution
//! - [`command`]: Command registry and message-to-arguments resolution

pub mod argument;
pub mod command;

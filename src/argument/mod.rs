//! Argument casting and overload resolution.
//!
//! Commands declare one or more overloads, each an ordered list of slots.
//! Every slot names one or more candidate argument types and optional
//! declarative rules. The resolver turns a raw invocation into a
//! [`domain::BoundArguments`] record or a single user-facing
//! [`domain::ArgumentError`].
//!
//! # Architecture
//!
//! - **Domain**: values, slots, overloads and the error model
//! - **Ports**: the [`ports::Directory`] used by reference types
//! - **Types**: one [`types::ArgumentType`] per value kind
//! - **Validation**: the declarative rule evaluator
//! - **Parsing**: the legacy tokenizer
//! - **Services**: raw value sources, the cast pipeline and
//!   [`services::OverloadResolver`]
//! - **Adapters**: [`adapters::InMemoryDirectory`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use chatargs::argument::adapters::InMemoryDirectory;
//! use chatargs::argument::domain::{
//!     InvocationContext, Overload, Overloads, SlotDefinition, Snowflake,
//! };
//! use chatargs::argument::services::OverloadResolver;
//! use chatargs::argument::types::{IntegerArgument, RestStringArgument};
//!
//! # tokio_test_block(async {
//! let overloads = Overloads::single(
//!     Overload::new([
//!         SlotDefinition::new("count", IntegerArgument).with_min(1),
//!         SlotDefinition::new("reason", RestStringArgument).optional(),
//!     ])
//!     .expect("valid signature"),
//! );
//! let resolver = OverloadResolver::new(Arc::new(InMemoryDirectory::new()));
//! let invocation = InvocationContext::legacy(Snowflake::new(1), Snowflake::new(2));
//!
//! let bound = resolver
//!     .resolve_legacy(&overloads, "3 spring cleaning", &invocation)
//!     .await
//!     .expect("input matches");
//! assert_eq!(bound.integer("count"), Some(3));
//! assert_eq!(bound.string("reason"), Some("spring cleaning"));
//! # });
//! # fn tokio_test_block(future: impl std::future::Future<Output = ()>) {
//! #     tokio::runtime::Runtime::new().expect("runtime").block_on(future);
//! # }
//! ```

pub mod adapters;
pub mod domain;
pub mod parsing;
pub mod ports;
pub mod services;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;

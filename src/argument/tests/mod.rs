//! Unit tests for the argument module.
//!
//! Tests are organised by concern: domain values, argument types in
//! isolation, signature validation at registration, overload resolution and
//! the per-invocation cast cache.

mod fixtures;
mod signature_tests;

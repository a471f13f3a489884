//! Command lookup on top of the argument engine.
//!
//! Recognises prefixed chat messages and interactive invocations, finds the
//! named command in a [`ports::CommandRegistry`] and resolves its overloads
//! with the argument resolver.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

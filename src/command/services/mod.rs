//! Command layer services.

pub mod argument;

pub use argument::{CommandArgumentService, CommandError, ResolvedCommand};

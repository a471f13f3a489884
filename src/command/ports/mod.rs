//! Port definitions for the command layer.

pub mod registry;

pub use registry::{CommandRegistry, CommandRegistryError, CommandRegistryResult};

//! Adapter implementations of the command ports.

pub mod memory;

pub use memory::InMemoryCommandRegistry;

//! Adapter implementations of the argument ports.

pub mod memory;

pub use memory::InMemoryDirectory;

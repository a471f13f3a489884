//! Port trait definitions for the argument subsystem.
//!
//! The engine reaches platform state only through these traits; adapters
//! connect them to a gateway cache, an HTTP client, or test fixtures.

pub mod directory;

pub use directory::{Directory, DirectoryError, DirectoryResult};

//! Command domain model.

mod config;
mod definition;
mod error;
mod message;

pub use config::CommandConfig;
pub use definition::CommandDefinition;
pub use error::CommandDefinitionError;
pub use message::LegacyMessage;

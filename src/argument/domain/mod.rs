//! Domain types for the argument subsystem.
//!
//! Slot and overload definitions are built once at registration and shared
//! read-only afterwards. Raw values, bound records and errors live for a
//! single invocation.

mod config;
mod context;
mod entity;
mod error;
mod ids;
pub(crate) mod message;
mod overload;
mod record;
mod rules;
mod slot;
mod value;

pub use config::CastingConfig;
pub use context::{InvocationContext, InvocationMode};
pub use entity::{
    Channel, ChannelKind, MAX_SNOWFLAKE_DIGITS, MIN_SNOWFLAKE_DIGITS, Member, MentionKind,
    ParseSnowflakeError, Role, Snowflake, User,
};
pub use error::{ArgumentError, ErrorKind, Rejection, SignatureError};
pub use ids::InvocationId;
pub use overload::{Overload, Overloads};
pub use record::BoundArguments;
pub use rules::{RuleName, Rules};
pub use slot::SlotDefinition;
pub use value::{OptionBag, RawValue, TypedValue};

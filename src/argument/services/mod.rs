//! Casting services: raw value sources, the per-slot cast pipeline and the
//! overload resolver.

mod cast;
mod error;
pub mod resolver;
pub mod source;

pub use cast::{cast_legacy, cast_option};
pub use error::ResolveError;
pub use resolver::{ArgumentInput, OverloadResolver};
pub use source::{Fetch, InteractionSource, LegacySource, RawValueSource};

//! Declarative rule evaluation shared by every argument type.

pub mod rules;

pub use rules::{evaluate_raw, evaluate_typed};

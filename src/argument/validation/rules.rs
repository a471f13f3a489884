//! Declarative rule evaluation.
//!
//! Rules are pure functions of the slot's [`Rules`] and the value being cast.
//! `choices` is checked against the raw value before transformation; range
//! bounds are checked against the typed value after it.

use std::cmp::Ordering;

use crate::argument::domain::{
    CastingConfig, ErrorKind, RawValue, Rejection, RuleName, Rules, TypedValue,
};

/// Checks the raw value against the slot's enumerated choices.
///
/// # Errors
///
/// Returns an `InvalidChoice` rejection tagged with [`RuleName::Choices`]
/// when the value's textual form matches none of the choices.
pub fn evaluate_raw(
    rules: &Rules,
    raw: &RawValue,
    config: &CastingConfig,
) -> Result<(), Rejection> {
    let Some(choices) = rules.choices() else {
        return Ok(());
    };
    let rendered = raw.render();
    let candidate = rendered.trim();
    let matched = choices.iter().any(|choice| {
        if config.case_sensitive_choices {
            choice == candidate
        } else {
            choice.to_lowercase() == candidate.to_lowercase()
        }
    });
    if matched {
        Ok(())
    } else {
        Err(Rejection::for_rule(
            ErrorKind::InvalidChoice,
            RuleName::Choices,
        ))
    }
}

/// Checks the typed value against the slot's range bounds.
///
/// Strings are measured in characters, numbers by value and durations in
/// whole seconds. Other values are not measurable and always pass.
///
/// # Errors
///
/// Returns an `InvalidRange` rejection tagged with the violated bound.
pub fn evaluate_typed(rules: &Rules, value: &TypedValue) -> Result<(), Rejection> {
    if rules.min().is_none() && rules.max().is_none() {
        return Ok(());
    }
    let Some(measure) = Measure::of(value) else {
        return Ok(());
    };
    if let Some(min) = rules.min()
        && measure.compare(min) == Ordering::Less
    {
        return Err(Rejection::for_rule(ErrorKind::InvalidRange, RuleName::RangeMin));
    }
    if let Some(max) = rules.max()
        && measure.compare(max) == Ordering::Greater
    {
        return Err(Rejection::for_rule(ErrorKind::InvalidRange, RuleName::RangeMax));
    }
    Ok(())
}

/// The measurable quantity of a typed value.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Measure {
    Whole(i64),
    Fractional(f64),
}

impl Measure {
    fn of(value: &TypedValue) -> Option<Self> {
        match value {
            TypedValue::String(text) => {
                let length = text.chars().count();
                Some(Self::Whole(i64::try_from(length).unwrap_or(i64::MAX)))
            }
            TypedValue::Integer(number) => Some(Self::Whole(*number)),
            TypedValue::Number(number) => Some(Self::Fractional(*number)),
            TypedValue::Duration(duration) => Some(Self::Whole(duration.num_seconds())),
            TypedValue::Absent
            | TypedValue::Boolean(_)
            | TypedValue::Snowflake(_)
            | TypedValue::User(_)
            | TypedValue::Member(_)
            | TypedValue::Channel(_)
            | TypedValue::Role(_) => None,
        }
    }

    fn compare(self, bound: i64) -> Ordering {
        match self {
            Self::Whole(value) => value.cmp(&bound),
            Self::Fractional(value) => value.total_cmp(&bound_as_float(bound)),
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "range bounds are small declared integers compared against numbers"
)]
fn bound_as_float(bound: i64) -> f64 {
    bound as f64
}

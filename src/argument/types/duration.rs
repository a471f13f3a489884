//! Duration argument type.
//!
//! Text durations are a run of `<digits><unit>` components, for example
//! `1w2d3h4m5s`. The unit is one of `s`, `m`, `h`, `d` or `w` in any case;
//! a component without a unit counts seconds, so a bare number is a number
//! of seconds. A leading `-` parses but is rejected as a negative duration,
//! the same way a negative integer option is.

use async_trait::async_trait;
use chrono::TimeDelta;

use super::{ArgumentKind, ArgumentType, CastContext, CastError, VALUE_RANGE_MESSAGE, shared_message};
use crate::argument::domain::{ErrorKind, RawValue, Rejection, TypedValue};

const SYNTAX_MESSAGE: &str = "`{{ value }}` is not a valid duration. Use a format like `1h30m`.";
const OVERFLOW_MESSAGE: &str = "`{{ value }}` is too long a duration.";
const NEGATIVE_MESSAGE: &str = "`{{ value }}` is a negative duration.";

/// A non-negative length of time.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationArgument;

#[async_trait]
impl ArgumentType for DurationArgument {
    fn kind(&self) -> ArgumentKind {
        ArgumentKind::Duration
    }

    fn default_message(&self, kind: ErrorKind) -> Option<&'static str> {
        match kind {
            ErrorKind::InvalidType => Some("`{{ name }}` must be a duration."),
            ErrorKind::SyntaxError => Some(SYNTAX_MESSAGE),
            ErrorKind::InvalidRange => Some(VALUE_RANGE_MESSAGE),
            ErrorKind::Required | ErrorKind::InvalidChoice => shared_message(kind),
        }
    }

    fn validate(&self, raw: &RawValue, _cx: &CastContext<'_>) -> Result<(), Rejection> {
        match raw {
            RawValue::Text(text) => match parse_seconds(text.trim()) {
                Err(DurationFault::Syntax) => Err(Rejection::syntax()),
                Ok(_) | Err(DurationFault::Overflow | DurationFault::Negative) => Ok(()),
            },
            _ => Ok(()),
        }
    }

    async fn transform(
        &self,
        raw: &RawValue,
        _cx: &CastContext<'_>,
    ) -> Result<TypedValue, CastError> {
        let seconds = match raw {
            RawValue::Integer(value) if *value >= 0 => *value,
            RawValue::Integer(_) => return Err(DurationFault::Negative.rejection().into()),
            RawValue::Text(text) => parse_seconds(text.trim()).map_err(DurationFault::rejection)?,
            RawValue::Number(_)
            | RawValue::Boolean(_)
            | RawValue::User(_)
            | RawValue::Member(_)
            | RawValue::Channel(_)
            | RawValue::Role(_) => return Err(Rejection::invalid_type().into()),
        };
        TimeDelta::try_seconds(seconds)
            .map(TypedValue::Duration)
            .ok_or_else(|| DurationFault::Overflow.rejection().into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DurationFault {
    Syntax,
    Overflow,
    Negative,
}

impl DurationFault {
    fn rejection(self) -> Rejection {
        match self {
            Self::Syntax => Rejection::syntax(),
            Self::Overflow => Rejection::invalid_type().with_message(OVERFLOW_MESSAGE),
            Self::Negative => Rejection::invalid_type().with_message(NEGATIVE_MESSAGE),
        }
    }
}

const fn unit_seconds(unit: char) -> Option<i64> {
    match unit.to_ascii_lowercase() {
        's' => Some(1),
        'm' => Some(60),
        'h' => Some(3_600),
        'd' => Some(86_400),
        'w' => Some(604_800),
        _ => None,
    }
}

/// Sums the components of a duration string into seconds.
///
/// Grammar failures win over overflow and sign, so a malformed string is
/// always a syntax error.
fn parse_seconds(text: &str) -> Result<i64, DurationFault> {
    let Some(magnitude) = text.strip_prefix('-') else {
        return parse_magnitude(text);
    };
    match parse_magnitude(magnitude) {
        Ok(0) => Ok(0),
        Ok(_) | Err(DurationFault::Overflow | DurationFault::Negative) => {
            Err(DurationFault::Negative)
        }
        Err(DurationFault::Syntax) => Err(DurationFault::Syntax),
    }
}

fn parse_magnitude(text: &str) -> Result<i64, DurationFault> {
    if text.is_empty() {
        return Err(DurationFault::Syntax);
    }
    let mut total = Some(0_i64);
    let mut pending: Option<Option<i64>> = None;

    for ch in text.chars() {
        if let Some(digit) = ch.to_digit(10) {
            let current = pending.unwrap_or(Some(0));
            pending = Some(
                current
                    .and_then(|value| value.checked_mul(10))
                    .and_then(|value| value.checked_add(i64::from(digit))),
            );
            continue;
        }
        let multiplier = unit_seconds(ch).ok_or(DurationFault::Syntax)?;
        let amount = pending.take().ok_or(DurationFault::Syntax)?;
        total = add_component(total, amount, multiplier);
    }
    if let Some(amount) = pending {
        total = add_component(total, amount, 1);
    }
    total.ok_or(DurationFault::Overflow)
}

fn add_component(total: Option<i64>, amount: Option<i64>, multiplier: i64) -> Option<i64> {
    let component = amount?.checked_mul(multiplier)?;
    total?.checked_add(component)
}

//! Cast pipeline for one slot.
//!
//! Each candidate runs `validate`, the raw-value rules, `transform`, the
//! typed-value rules and `post_transform_validation`, stopping at the first
//! failure. The first candidate to pass binds the slot. When all fail, a
//! range violation from any candidate is reported; otherwise the last
//! candidate's error is.

use std::collections::BTreeMap;

use crate::argument::domain::{ErrorKind, RawValue, Rejection, SlotDefinition, TypedValue};
use crate::argument::ports::DirectoryError;
use crate::argument::types::{ArgumentType, CastContext, CastError};
use crate::argument::validation::{evaluate_raw, evaluate_typed};

use super::ResolveError;

/// Memoizes directory-backed phases within one resolver call.
///
/// Outcomes are keyed by the argument type's fingerprint and the raw value,
/// so a later overload that retries the same type on the same input does not
/// repeat lookups. Directory faults are never stored.
#[derive(Debug, Default)]
pub(crate) struct CastCache {
    transforms: BTreeMap<CacheKey, Result<TypedValue, Rejection>>,
    checks: BTreeMap<CacheKey, Result<(), Rejection>>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct CacheKey {
    fingerprint: String,
    raw: String,
}

impl CacheKey {
    fn new(candidate: &dyn ArgumentType, raw: &RawValue) -> Self {
        Self {
            fingerprint: candidate.fingerprint(),
            raw: serde_json::to_string(raw).unwrap_or_else(|_| format!("{raw:?}")),
        }
    }
}

/// Splits a phase outcome into a cacheable part and a fault.
fn cacheable<T>(outcome: Result<T, CastError>) -> Result<Result<T, Rejection>, DirectoryError> {
    match outcome {
        Ok(value) => Ok(Ok(value)),
        Err(CastError::Rejected(rejection)) => Ok(Err(rejection)),
        Err(CastError::Directory(error)) => Err(error),
    }
}

/// Casts a raw value for `slot`, returning the index of the candidate that
/// bound it with the typed value.
pub(crate) async fn cast_slot(
    slot: &SlotDefinition,
    raw: &RawValue,
    cx: CastContext<'_>,
    cache: &mut CastCache,
) -> Result<(usize, TypedValue), ResolveError> {
    let mut last_error = None;
    let mut range_error = None;
    for (index, candidate) in slot.candidates().iter().enumerate() {
        match cast_candidate(&**candidate, slot, raw, cx, cache).await {
            Ok(value) => return Ok((index, value)),
            Err(CastError::Directory(error)) => return Err(error.into()),
            Err(CastError::Rejected(rejection)) => {
                tracing::trace!(
                    slot = slot.name(),
                    candidate = %candidate.kind(),
                    kind = %rejection.kind(),
                    "candidate rejected"
                );
                let error = slot.error(
                    cx.position(),
                    &rejection,
                    Some(&**candidate),
                    Some(raw.render()),
                );
                if rejection.kind() == ErrorKind::InvalidRange {
                    range_error.get_or_insert(error);
                } else {
                    last_error = Some(error);
                }
            }
        }
    }
    Err(range_error
        .or(last_error)
        .unwrap_or_else(|| slot.required_error(cx.position()))
        .into())
}

async fn cast_candidate(
    candidate: &dyn ArgumentType,
    slot: &SlotDefinition,
    raw: &RawValue,
    cx: CastContext<'_>,
    cache: &mut CastCache,
) -> Result<TypedValue, CastError> {
    candidate.validate(raw, &cx)?;
    evaluate_raw(slot.rules(), raw, cx.config())?;

    let key = CacheKey::new(candidate, raw);
    let value = if let Some(hit) = cache.transforms.get(&key) {
        tracing::trace!(fingerprint = %key.fingerprint, "transform cache hit");
        hit.clone()?
    } else {
        let outcome = cacheable(candidate.transform(raw, &cx).await)?;
        cache.transforms.insert(key.clone(), outcome.clone());
        outcome?
    };

    evaluate_typed(slot.rules(), &value)?;

    if let Some(hit) = cache.checks.get(&key) {
        hit.clone()?;
    } else {
        let outcome = cacheable(candidate.post_transform_validation(&value, &cx).await)?;
        cache.checks.insert(key, outcome.clone());
        outcome?;
    }
    Ok(value)
}

/// Casts a single legacy token for `slot` at `position`.
///
/// Uses a fresh cache; the resolver is the usual entry point.
///
/// # Errors
///
/// Returns [`ResolveError::Rejected`] when every candidate rejects the token
/// and [`ResolveError::Directory`] when a lookup fails.
pub async fn cast_legacy(
    slot: &SlotDefinition,
    position: usize,
    token: &str,
    cx: CastContext<'_>,
) -> Result<TypedValue, ResolveError> {
    cast_option(slot, position, &RawValue::text(token), cx).await
}

/// Casts a platform option value for `slot` at `position`.
///
/// # Errors
///
/// Returns [`ResolveError::Rejected`] when every candidate rejects the value
/// and [`ResolveError::Directory`] when a lookup fails.
pub async fn cast_option(
    slot: &SlotDefinition,
    position: usize,
    raw: &RawValue,
    cx: CastContext<'_>,
) -> Result<TypedValue, ResolveError> {
    let mut cache = CastCache::default();
    cast_slot(slot, raw, cx.at(position, slot.name()), &mut cache)
        .await
        .map(|(_, value)| value)
}

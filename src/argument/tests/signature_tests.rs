//! Tests for slot and overload validation at registration.

use rstest::rstest;

use crate::argument::{
    domain::{ErrorKind, Overload, Overloads, RuleName, SignatureError, SlotDefinition},
    types::{IntegerArgument, RestStringArgument, SnowflakeArgument, StringArgument, UserArgument},
};

#[test]
fn well_formed_overload_is_accepted() {
    let overload = Overload::new([
        SlotDefinition::new("target", UserArgument).or_named("id", SnowflakeArgument),
        SlotDefinition::new("days", IntegerArgument)
            .with_min(0)
            .with_max(7)
            .optional(),
        SlotDefinition::new("reason", RestStringArgument).optional(),
    ])
    .expect("overload is valid");
    assert_eq!(overload.len(), 3);
}

#[test]
fn rest_argument_must_be_last() {
    let error = Overload::new([
        SlotDefinition::new("reason", RestStringArgument),
        SlotDefinition::new("count", IntegerArgument),
    ])
    .expect_err("rest slot is not last");
    assert_eq!(
        error,
        SignatureError::RestNotLast {
            position: 0,
            name: "reason".to_owned(),
        }
    );
}

#[test]
fn rest_as_a_fallback_candidate_must_also_be_last() {
    let error = Overload::new([
        SlotDefinition::new("text", StringArgument).or(RestStringArgument),
        SlotDefinition::new("count", IntegerArgument),
    ])
    .expect_err("rest candidate is not last");
    assert!(matches!(error, SignatureError::RestNotLast { position: 0, .. }));
}

#[rstest]
#[case(SlotDefinition::new("text", StringArgument).or(RestStringArgument))]
#[case(SlotDefinition::new("text", RestStringArgument).or(IntegerArgument))]
fn rest_slots_cannot_mix_single_token_candidates(#[case] slot: SlotDefinition) {
    let error = Overload::new([SlotDefinition::new("count", IntegerArgument), slot])
        .expect_err("extents are mixed");
    assert_eq!(error, SignatureError::MixedExtents("text".to_owned()));
}

#[rstest]
#[case("target", "target")]
#[case("target", "id")]
fn slot_names_are_unique_within_an_overload(#[case] first: &str, #[case] second: &str) {
    let error = Overload::new([
        SlotDefinition::new(first, UserArgument).or_named("id", SnowflakeArgument),
        SlotDefinition::new(second, IntegerArgument),
    ])
    .expect_err("names collide");
    assert!(matches!(error, SignatureError::DuplicateSlotName(_)));
}

#[test]
fn inverted_range_is_rejected() {
    let error = Overload::new([SlotDefinition::new("count", IntegerArgument)
        .with_min(10)
        .with_max(1)])
    .expect_err("min exceeds max");
    assert_eq!(
        error,
        SignatureError::InvertedRange {
            name: "count".to_owned(),
            min: 10,
            max: 1,
        }
    );
}

#[test]
fn empty_choices_are_rejected() {
    let error = Overload::new([
        SlotDefinition::new("colour", StringArgument).with_choices(Vec::<String>::new())
    ])
    .expect_err("no choices");
    assert_eq!(error, SignatureError::EmptyChoices("colour".to_owned()));
}

#[rstest]
#[case(SlotDefinition::new("count", IntegerArgument).with_message(ErrorKind::InvalidType, "{{ name"))]
#[case(SlotDefinition::new("count", IntegerArgument).with_rule_message(RuleName::RangeMax, "{% if %}"))]
fn broken_templates_are_rejected(#[case] slot: SlotDefinition) {
    let error = Overload::new([slot]).expect_err("template does not compile");
    assert!(matches!(error, SignatureError::InvalidTemplate { ref name, .. } if name == "count"));
}

#[test]
fn paired_names_must_match_candidates() {
    let slot = SlotDefinition::new("target", UserArgument)
        .or_named("id", SnowflakeArgument)
        .or(IntegerArgument);
    let error = Overload::new([slot]).expect_err("three candidates, two names");
    assert_eq!(
        error,
        SignatureError::NameCountMismatch {
            name: "target".to_owned(),
            names: 2,
            candidates: 3,
        }
    );
}

#[rstest]
#[case("")]
#[case("two words")]
#[case("émoji")]
fn slot_names_must_be_identifiers(#[case] name: &str) {
    let error = Overload::new([SlotDefinition::new(name, StringArgument)])
        .expect_err("name is not an identifier");
    assert_eq!(error, SignatureError::InvalidSlotName(name.to_owned()));
}

#[test]
fn a_command_needs_at_least_one_overload() {
    let error = Overloads::new(Vec::new()).expect_err("no overloads");
    assert_eq!(error, SignatureError::NoOverloads);
}

#[test]
fn an_overload_may_take_no_arguments() {
    let overloads = Overloads::new([Overload::empty()]).expect("empty overload is valid");
    assert_eq!(overloads.len(), 1);
    assert!(overloads.iter().all(Overload::is_empty));
}

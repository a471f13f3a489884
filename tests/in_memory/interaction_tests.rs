//! In-memory integration tests for interactive invocations.

use chatargs::argument::domain::{
    ErrorKind, InvocationContext, Member, OptionBag, RawValue, Snowflake, User,
};
use chatargs::argument::services::ResolveError;
use chatargs::command::services::CommandError;
use chrono::TimeDelta;
use rstest::rstest;

use crate::in_memory::helpers::{
    ALICE, GUILD, STRANGER, TestService, interaction, message, service,
};

fn alice_option() -> RawValue {
    RawValue::User(User::new(ALICE, "alice"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn options_bind_by_slot_name(
    service: TestService,
    interaction: InvocationContext,
) -> Result<(), eyre::Report> {
    let options = OptionBag::new()
        .with("target", alice_option())
        .with("days", RawValue::Integer(2))
        .with("reason", RawValue::text("raiding"));
    let resolved = service.resolve_interaction("ban", &options, &interaction).await?;
    let arguments = resolved.arguments();

    eyre::ensure!(arguments.overload() == 0, "expected the member overload");
    eyre::ensure!(arguments.integer("days") == Some(2), "days should bind");
    eyre::ensure!(
        arguments.member("target").map(Member::display_name) == Some("Ally"),
        "user option should resolve to the guild member"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_options_fall_through_to_later_overloads(
    service: TestService,
    interaction: InvocationContext,
) -> Result<(), eyre::Report> {
    let options = OptionBag::new().with("id", RawValue::text(STRANGER.to_string()));
    let resolved = service.resolve_interaction("ban", &options, &interaction).await?;

    eyre::ensure!(resolved.arguments().overload() == 1, "expected the ID overload");
    eyre::ensure!(
        resolved.arguments().snowflake("id") == Some(STRANGER),
        "id should bind"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn free_text_and_options_bind_the_same_values(
    service: TestService,
    message: InvocationContext,
    interaction: InvocationContext,
) -> Result<(), eyre::Report> {
    let legacy = service
        .resolve_message("!mute <@200000000000000002> 10m too loud", &message)
        .await?
        .ok_or_else(|| eyre::eyre!("message should be a command"))?;
    let options = OptionBag::new()
        .with("target", alice_option())
        .with("length", RawValue::Integer(600))
        .with("reason", RawValue::text("too loud"));
    let interactive = service.resolve_interaction("mute", &options, &interaction).await?;

    eyre::ensure!(
        legacy.arguments() == interactive.arguments(),
        "bound arguments differ: {:?} vs {:?}",
        legacy.arguments(),
        interactive.arguments()
    );
    eyre::ensure!(
        interactive.arguments().duration("length") == Some(TimeDelta::minutes(10)),
        "length should be ten minutes"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn members_from_the_platform_are_used_directly(
    service: TestService,
    interaction: InvocationContext,
) -> Result<(), eyre::Report> {
    let supplied = Member::new(User::new(ALICE, "alice"), GUILD).with_nickname("Fresh");
    let options = OptionBag::new()
        .with("member", RawValue::Member(supplied))
        .with("role", RawValue::text("400000000000000001"));
    let resolved = service.resolve_interaction("grant", &options, &interaction).await?;

    eyre::ensure!(
        resolved.arguments().member("member").map(Member::display_name) == Some("Fresh"),
        "platform member should not be looked up again"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn interactive_errors_use_the_same_messages(
    service: TestService,
    interaction: InvocationContext,
) -> Result<(), eyre::Report> {
    let options = OptionBag::new()
        .with("target", alice_option())
        .with("length", RawValue::text("30s"));
    let result = service.resolve_interaction("mute", &options, &interaction).await;
    let Err(CommandError::Arguments(ResolveError::Rejected(error))) = result else {
        eyre::bail!("expected an argument error, got {result:?}");
    };

    eyre::ensure!(error.kind() == ErrorKind::InvalidRange, "expected a range error");
    eyre::ensure!(error.position() == 1, "error should point at the length");
    eyre::ensure!(
        error.message() == "Mutes must last at least a minute.",
        "unexpected message: {}",
        error.message()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_interactions_are_reported(
    service: TestService,
    interaction: InvocationContext,
) -> Result<(), eyre::Report> {
    let result = service
        .resolve_interaction("kick", &OptionBag::new(), &interaction)
        .await;

    eyre::ensure!(
        matches!(result, Err(CommandError::UnknownCommand(ref name)) if name == "kick"),
        "expected an unknown command error, got {result:?}"
    );
    Ok(())
}

#[rstest]
fn invocation_ids_are_unique(interaction: InvocationContext) {
    let other = InvocationContext::interactive(Snowflake::new(1), Snowflake::new(2));
    assert_ne!(interaction.id(), other.id());
}

//! In-memory integration tests for prefixed moderation commands.

use chatargs::argument::domain::{ArgumentError, ErrorKind, InvocationContext};
use chatargs::argument::services::ResolveError;
use chatargs::command::services::{CommandError, ResolvedCommand};
use chrono::TimeDelta;
use rstest::rstest;

use crate::in_memory::helpers::{
    ALICE, GENERAL, HELPERS, MODERATOR, STRANGER, TestService, message, service,
};

/// Resolves `content` and requires it to name a command.
///
/// # Errors
///
/// Returns an error if resolution fails or the message is not a command.
async fn resolve(
    service: &TestService,
    invocation: &InvocationContext,
    content: &str,
) -> Result<ResolvedCommand, eyre::Report> {
    service
        .resolve_message(content, invocation)
        .await?
        .ok_or_else(|| eyre::eyre!("`{content}` was not recognised as a command"))
}

/// Resolves `content` and returns the user-facing argument error.
///
/// # Errors
///
/// Returns an error if resolution succeeds or fails for another reason.
async fn reject(
    service: &TestService,
    invocation: &InvocationContext,
    content: &str,
) -> Result<ArgumentError, eyre::Report> {
    match service.resolve_message(content, invocation).await {
        Err(CommandError::Arguments(ResolveError::Rejected(error))) => Ok(error),
        other => Err(eyre::eyre!("expected an argument error, got {other:?}")),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ban_binds_member_days_and_reason(
    service: TestService,
    message: InvocationContext,
) -> Result<(), eyre::Report> {
    let resolved = resolve(&service, &message, "!ban <@200000000000000002> 3 being rude").await?;
    let arguments = resolved.arguments();

    eyre::ensure!(arguments.overload() == 0, "expected the member overload");
    eyre::ensure!(
        arguments.member("target").map(|member| member.id()) == Some(ALICE),
        "target should be alice"
    );
    eyre::ensure!(arguments.integer("days") == Some(3), "days should be 3");
    eyre::ensure!(
        arguments.string("reason") == Some("being rude"),
        "reason should be the remaining text"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ban_leaves_optional_slots_absent(
    service: TestService,
    message: InvocationContext,
) -> Result<(), eyre::Report> {
    let resolved = resolve(&service, &message, "!b <@!200000000000000002>").await?;
    let arguments = resolved.arguments();

    eyre::ensure!(resolved.command().name() == "ban", "alias should resolve to ban");
    eyre::ensure!(!arguments.is_present("days"), "days should be absent");
    eyre::ensure!(!arguments.is_present("reason"), "reason should be absent");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ban_falls_back_to_bare_ids_for_non_members(
    service: TestService,
    message: InvocationContext,
) -> Result<(), eyre::Report> {
    let resolved = resolve(&service, &message, "!ban 200000000000000004 ban evasion").await?;
    let arguments = resolved.arguments();

    eyre::ensure!(arguments.overload() == 1, "expected the ID overload");
    eyre::ensure!(arguments.snowflake("id") == Some(STRANGER), "id should bind");
    eyre::ensure!(!arguments.is_present("target"), "target belongs to the other overload");
    eyre::ensure!(arguments.string("reason") == Some("ban evasion"), "reason should bind");
    Ok(())
}

#[rstest]
#[case("!ban", 0, ErrorKind::Required, "You must provide a value for `target`.")]
#[case(
    "!ban nobody",
    0,
    ErrorKind::InvalidType,
    "`nobody` is not a valid member mention or ID."
)]
#[case(
    "!mute <@200000000000000002> 5s",
    1,
    ErrorKind::InvalidRange,
    "Mutes must last at least a minute."
)]
#[case(
    "!mute <@200000000000000002> soon",
    1,
    ErrorKind::SyntaxError,
    "`soon` is not a valid duration. Use a format like `1h30m`."
)]
#[case(
    "!mute <@200000000000000002> \"10m",
    1,
    ErrorKind::SyntaxError,
    "`length` contains a quote that is never closed."
)]
#[case(
    "!mute <@200000000000000003> 10m",
    0,
    ErrorKind::InvalidType,
    "You don't have permission to target `<@200000000000000003>`."
)]
#[case(
    "!slowmode <#300000000000000002> 30s",
    0,
    ErrorKind::InvalidType,
    "`<#300000000000000002>` must be a text channel."
)]
#[case(
    "!slowmode <#300000000000000001> 7h",
    1,
    ErrorKind::InvalidRange,
    "`interval` must be at most 21600."
)]
#[case(
    "!grant <@200000000000000002>",
    1,
    ErrorKind::Required,
    "You must provide a value for `role`."
)]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_input_reports_one_error(
    service: TestService,
    message: InvocationContext,
    #[case] content: &str,
    #[case] position: usize,
    #[case] kind: ErrorKind,
    #[case] text: &str,
) -> Result<(), eyre::Report> {
    let error = reject(&service, &message, content).await?;

    eyre::ensure!(error.kind() == kind, "expected {kind}, got {}", error.kind());
    eyre::ensure!(
        error.position() == position,
        "expected position {position}, got {}",
        error.position()
    );
    eyre::ensure!(error.message() == text, "unexpected message: {}", error.message());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mute_reads_compound_durations(
    service: TestService,
    message: InvocationContext,
) -> Result<(), eyre::Report> {
    let resolved = resolve(&service, &message, "!mute 200000000000000002 1h30m spamming").await?;
    let arguments = resolved.arguments();

    eyre::ensure!(
        arguments.duration("length") == Some(TimeDelta::minutes(90)),
        "length should be ninety minutes"
    );
    eyre::ensure!(arguments.string("reason") == Some("spamming"), "reason should bind");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn quoted_reason_joins_its_tokens(
    service: TestService,
    message: InvocationContext,
) -> Result<(), eyre::Report> {
    let resolved = resolve(
        &service,
        &message,
        "!ban <@200000000000000002> 2 \"spam bot\"   again",
    )
    .await?;

    eyre::ensure!(
        resolved.arguments().string("reason") == Some("spam bot again"),
        "reason should be the remaining token values joined by spaces"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn slowmode_and_grant_resolve_guild_entities(
    service: TestService,
    message: InvocationContext,
) -> Result<(), eyre::Report> {
    let slowmode = resolve(&service, &message, "!slowmode <#300000000000000001> 30s").await?;
    eyre::ensure!(
        slowmode.arguments().channel("channel").map(|channel| channel.id) == Some(GENERAL),
        "channel should be #general"
    );
    eyre::ensure!(
        slowmode.arguments().duration("interval") == Some(TimeDelta::seconds(30)),
        "interval should be thirty seconds"
    );

    let grant = resolve(
        &service,
        &message,
        "!ADDROLE <@200000000000000002> <@&400000000000000001>",
    )
    .await?;
    eyre::ensure!(
        grant.arguments().role("role").map(|role| role.id) == Some(HELPERS),
        "role should be helpers"
    );
    eyre::ensure!(
        grant.arguments().member("member").map(|member| member.display_name()) == Some("Ally"),
        "member should carry the guild nickname"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn member_commands_need_a_guild(service: TestService) -> Result<(), eyre::Report> {
    let direct = InvocationContext::legacy(MODERATOR, GENERAL);
    let error = reject(&service, &direct, "!mute <@200000000000000002> 10m").await?;

    eyre::ensure!(
        error.message() == "`target` can only be used inside a server.",
        "unexpected message: {}",
        error.message()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ordinary_chat_is_not_a_command(
    service: TestService,
    message: InvocationContext,
) -> Result<(), eyre::Report> {
    let resolved = service.resolve_message("ban them all", &message).await?;
    eyre::ensure!(resolved.is_none(), "plain chat should be ignored");
    Ok(())
}

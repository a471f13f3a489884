//! In-memory integration tests for directory state and faults.

use std::sync::Arc;

use chatargs::argument::adapters::InMemoryDirectory;
use chatargs::argument::domain::InvocationContext;
use chatargs::argument::ports::DirectoryError;
use chatargs::argument::services::ResolveError;
use chatargs::command::{
    adapters::InMemoryCommandRegistry,
    services::{CommandArgumentService, CommandError},
};
use rstest::rstest;

use crate::in_memory::helpers::{
    ALICE, GUILD, MODERATOR, TestService, directory, message, moderation_commands,
};

/// Builds a service sharing state with `directory`.
///
/// # Errors
///
/// Returns an error if the moderation commands fail to register.
fn service_over(directory: &InMemoryDirectory) -> Result<TestService, eyre::Report> {
    let registry = InMemoryCommandRegistry::with_commands(moderation_commands()?)?;
    Ok(CommandArgumentService::new(
        Arc::new(registry),
        Arc::new(directory.clone()),
    ))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn departed_members_are_no_longer_found(
    directory: InMemoryDirectory,
    message: InvocationContext,
) -> Result<(), eyre::Report> {
    let service = service_over(&directory)?;
    directory.remove_member(GUILD, ALICE);

    let result = service
        .resolve_message("!mute <@200000000000000002> 10m", &message)
        .await;
    let Err(CommandError::Arguments(ResolveError::Rejected(error))) = result else {
        eyre::bail!("expected an argument error, got {result:?}");
    };
    eyre::ensure!(
        error.message() == "I couldn't find a member with ID `<@200000000000000002>` in this server.",
        "unexpected message: {}",
        error.message()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn target_denials_apply_per_actor(
    directory: InMemoryDirectory,
    message: InvocationContext,
) -> Result<(), eyre::Report> {
    let service = service_over(&directory.clone().deny_target(GUILD, MODERATOR, ALICE))?;

    let denied = service
        .resolve_message("!mute <@200000000000000002> 10m", &message)
        .await;
    eyre::ensure!(
        matches!(denied, Err(CommandError::Arguments(ResolveError::Rejected(_)))),
        "moderator should not be able to target alice, got {denied:?}"
    );

    let as_alice = InvocationContext::legacy(ALICE, message.channel_id()).in_guild(GUILD);
    let own = service
        .resolve_message("!mute <@200000000000000002> 10m", &as_alice)
        .await?;
    eyre::ensure!(own.is_some(), "members may always target themselves");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn outages_abort_resolution_until_cleared(
    directory: InMemoryDirectory,
    message: InvocationContext,
) -> Result<(), eyre::Report> {
    let service = service_over(&directory)?;
    directory.simulate_outage("gateway reconnecting");

    let result = service
        .resolve_message("!ban 200000000000000004 evasion", &message)
        .await;
    eyre::ensure!(
        matches!(
            result,
            Err(CommandError::Arguments(ResolveError::Directory(
                DirectoryError::Unavailable(ref reason)
            ))) if reason == "gateway reconnecting"
        ),
        "expected the outage to surface, got {result:?}"
    );

    directory.clear_outage();
    let resolved = service
        .resolve_message("!ban 200000000000000004 evasion", &message)
        .await?;
    eyre::ensure!(resolved.is_some(), "resolution should succeed after the outage");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lookups_without_the_directory_still_work_during_outages(
    directory: InMemoryDirectory,
    message: InvocationContext,
) -> Result<(), eyre::Report> {
    let service = service_over(&directory)?;
    directory.simulate_outage("gateway reconnecting");

    let result = service.resolve_message("!ban", &message).await;
    let Err(CommandError::Arguments(ResolveError::Rejected(error))) = result else {
        eyre::bail!("expected an argument error, got {result:?}");
    };
    eyre::ensure!(
        error.message() == "You must provide a value for `target`.",
        "unexpected message: {}",
        error.message()
    );
    Ok(())
}

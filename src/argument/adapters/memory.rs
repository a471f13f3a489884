//! In-memory directory adapter.
//!
//! Mirrors platform state in process. Useful for tests and for hosts that
//! keep a local cache of users, channels and roles.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use async_trait::async_trait;

use crate::argument::domain::{Channel, Member, Role, Snowflake, User};
use crate::argument::ports::{Directory, DirectoryError, DirectoryResult};

/// In-memory implementation of [`Directory`].
///
/// Clones share state. Every member may target every other member unless a
/// rule added with [`InMemoryDirectory::deny_target`] or
/// [`InMemoryDirectory::protect`] says otherwise. Reads and writes both
/// recover a poisoned lock; every update is a single insert or removal.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    store: Arc<RwLock<DirectoryStore>>,
}

#[derive(Debug, Default)]
struct DirectoryStore {
    users: HashMap<Snowflake, User>,
    members: HashMap<(Snowflake, Snowflake), Member>,
    channels: HashMap<Snowflake, Channel>,
    roles: HashMap<(Snowflake, Snowflake), Role>,
    denied: HashSet<(Snowflake, Snowflake, Snowflake)>,
    protected: HashSet<(Snowflake, Snowflake)>,
    outage: Option<String>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user.
    #[must_use]
    pub fn with_user(self, user: User) -> Self {
        self.write(|store| {
            store.users.insert(user.id, user);
        });
        self
    }

    /// Adds a guild member and its user.
    #[must_use]
    pub fn with_member(self, member: Member) -> Self {
        self.write(|store| {
            store.users.insert(member.user.id, member.user.clone());
            store.members.insert((member.guild_id, member.user.id), member);
        });
        self
    }

    /// Adds a channel.
    #[must_use]
    pub fn with_channel(self, channel: Channel) -> Self {
        self.write(|store| {
            store.channels.insert(channel.id, channel);
        });
        self
    }

    /// Adds a role.
    #[must_use]
    pub fn with_role(self, role: Role) -> Self {
        self.write(|store| {
            store.roles.insert((role.guild_id, role.id), role);
        });
        self
    }

    /// Forbids `actor` from targeting `target` in `guild_id`.
    #[must_use]
    pub fn deny_target(self, guild_id: Snowflake, actor: Snowflake, target: Snowflake) -> Self {
        self.write(|store| {
            store.denied.insert((guild_id, actor, target));
        });
        self
    }

    /// Forbids every other member from targeting `target` in `guild_id`.
    #[must_use]
    pub fn protect(self, guild_id: Snowflake, target: Snowflake) -> Self {
        self.write(|store| {
            store.protected.insert((guild_id, target));
        });
        self
    }

    /// Makes every lookup fail with [`DirectoryError::Unavailable`].
    pub fn simulate_outage(&self, reason: impl Into<String>) {
        let message = reason.into();
        self.write(|store| store.outage = Some(message));
    }

    /// Restores normal lookups after [`InMemoryDirectory::simulate_outage`].
    pub fn clear_outage(&self) {
        self.write(|store| store.outage = None);
    }

    /// Removes a member, for example after they leave the guild.
    pub fn remove_member(&self, guild_id: Snowflake, id: Snowflake) {
        self.write(|store| {
            store.members.remove(&(guild_id, id));
        });
    }

    fn write(&self, update: impl FnOnce(&mut DirectoryStore)) {
        let mut guard = self.store.write().unwrap_or_else(PoisonError::into_inner);
        update(&mut guard);
    }

    fn read(&self) -> DirectoryResult<RwLockReadGuard<'_, DirectoryStore>> {
        let guard = self.store.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(reason) = guard.outage.clone() {
            return Err(DirectoryError::Unavailable(reason));
        }
        Ok(guard)
    }
}

#[async_trait]
impl Directory for InMemoryDirectory {
    async fn resolve_user(&self, id: Snowflake) -> DirectoryResult<Option<User>> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    async fn resolve_member(
        &self,
        guild_id: Snowflake,
        id: Snowflake,
    ) -> DirectoryResult<Option<Member>> {
        Ok(self.read()?.members.get(&(guild_id, id)).cloned())
    }

    async fn resolve_channel(&self, id: Snowflake) -> DirectoryResult<Option<Channel>> {
        Ok(self.read()?.channels.get(&id).cloned())
    }

    async fn resolve_role(
        &self,
        guild_id: Snowflake,
        id: Snowflake,
    ) -> DirectoryResult<Option<Role>> {
        Ok(self.read()?.roles.get(&(guild_id, id)).cloned())
    }

    async fn can_target(
        &self,
        guild_id: Snowflake,
        actor: Snowflake,
        target: &Member,
    ) -> DirectoryResult<bool> {
        let store = self.read()?;
        let target_id = target.id();
        if actor == target_id {
            return Ok(true);
        }
        let denied = store.denied.contains(&(guild_id, actor, target_id))
            || store.protected.contains(&(guild_id, target_id));
        Ok(!denied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::domain::ChannelKind;

    const GUILD: Snowflake = Snowflake::new(100_000_000_000_000_001);
    const ALICE: Snowflake = Snowflake::new(200_000_000_000_000_001);
    const BOB: Snowflake = Snowflake::new(200_000_000_000_000_002);

    fn member(id: Snowflake, name: &str) -> Member {
        Member::new(User::new(id, name), GUILD)
    }

    #[tokio::test]
    async fn members_register_their_users() {
        let directory = InMemoryDirectory::new().with_member(member(ALICE, "alice"));
        let user = directory.resolve_user(ALICE).await.expect("lookup succeeds");
        assert_eq!(user.map(|found| found.username), Some("alice".to_owned()));
    }

    #[tokio::test]
    async fn channels_resolve_by_id() {
        let channel = Channel::new(BOB, GUILD, "general", ChannelKind::Text);
        let directory = InMemoryDirectory::new().with_channel(channel.clone());
        let found = directory.resolve_channel(BOB).await.expect("lookup succeeds");
        assert_eq!(found, Some(channel));
    }

    #[tokio::test]
    async fn target_policy_honours_denials_and_protection() {
        let bob = member(BOB, "bob");
        let directory = InMemoryDirectory::new().deny_target(GUILD, ALICE, BOB);
        assert!(!directory.can_target(GUILD, ALICE, &bob).await.expect("policy"));
        assert!(directory.can_target(GUILD, BOB, &bob).await.expect("policy"));

        let protected = InMemoryDirectory::new().protect(GUILD, BOB);
        let carol = Snowflake::new(200_000_000_000_000_003);
        assert!(!protected.can_target(GUILD, carol, &bob).await.expect("policy"));
    }

    #[tokio::test]
    async fn outage_fails_lookups_until_cleared() {
        let directory = InMemoryDirectory::new().with_member(member(ALICE, "alice"));
        directory.simulate_outage("gateway reconnecting");
        assert!(matches!(
            directory.resolve_user(ALICE).await,
            Err(DirectoryError::Unavailable(_))
        ));
        directory.clear_outage();
        assert!(directory.resolve_user(ALICE).await.is_ok());
    }

    #[tokio::test]
    async fn poisoned_store_still_serves_reads_and_writes() {
        let directory = InMemoryDirectory::new().with_member(member(ALICE, "alice"));
        let shared = directory.clone();
        let outcome = std::thread::spawn(move || {
            let _guard = shared.store.write().expect("lock is free");
            panic!("writer panicked");
        })
        .join();
        assert!(outcome.is_err());
        assert!(directory.store.is_poisoned());

        let user = directory.resolve_user(ALICE).await.expect("read recovers");
        assert!(user.is_some());

        directory.remove_member(GUILD, ALICE);
        let member = directory.resolve_member(GUILD, ALICE).await.expect("read recovers");
        assert_eq!(member, None);
    }
}

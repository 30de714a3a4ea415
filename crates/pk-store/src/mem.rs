use crate::HandRecord;
use crate::ParticipantRecord;
use crate::PlayRecord;
use crate::Store;
use crate::StoreError;
use pk_auth::Member;
use pk_core::Chips;
use pk_core::Unique;
use pk_core::ID;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Mutex;

/// In-memory `Store`, mirroring `PgStore`'s contract for tests that would
/// otherwise need a live Postgres instance.
#[derive(Default)]
pub struct MemStore {
    users: Mutex<HashMap<ID<Member>, (Member, String, Chips)>>,
    by_username: Mutex<HashMap<String, ID<Member>>>,
    friends: Mutex<HashMap<ID<Member>, HashSet<ID<Member>>>>,
    hands: Mutex<Vec<(HandRecord, Vec<ParticipantRecord>, Vec<PlayRecord>)>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemStore {
    async fn exists(&self, username: &str, email: &str) -> Result<bool, StoreError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .any(|(m, _, _)| m.username() == username || m.email() == email))
    }

    async fn create_user(&self, member: &Member, hashword: &str) -> Result<(), StoreError> {
        if self.exists(member.username(), member.email()).await? {
            return Err(StoreError::Conflict);
        }
        self.by_username
            .lock()
            .unwrap()
            .insert(member.username().to_string(), member.id());
        self.users
            .lock()
            .unwrap()
            .insert(member.id(), (member.clone(), hashword.to_string(), 0));
        Ok(())
    }

    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<(Member, String)>, StoreError> {
        let id = self.by_username.lock().unwrap().get(username).copied();
        Ok(id.and_then(|id| {
            self.users
                .lock()
                .unwrap()
                .get(&id)
                .map(|(m, h, _)| (m.clone(), h.clone()))
        }))
    }

    async fn get_balance(&self, user: ID<Member>) -> Result<Chips, StoreError> {
        self.users
            .lock()
            .unwrap()
            .get(&user)
            .map(|(_, _, balance)| *balance)
            .ok_or(StoreError::NotFound)
    }

    async fn adjust_balance(&self, user: ID<Member>, delta: Chips) -> Result<Chips, StoreError> {
        let mut users = self.users.lock().unwrap();
        let entry = users.get_mut(&user).ok_or(StoreError::NotFound)?;
        entry.2 += delta;
        Ok(entry.2)
    }

    async fn add_friend(&self, user: ID<Member>, friend: ID<Member>) -> Result<(), StoreError> {
        self.friends
            .lock()
            .unwrap()
            .entry(user)
            .or_default()
            .insert(friend);
        Ok(())
    }

    async fn remove_friend(&self, user: ID<Member>, friend: ID<Member>) -> Result<(), StoreError> {
        if let Some(set) = self.friends.lock().unwrap().get_mut(&user) {
            set.remove(&friend);
        }
        Ok(())
    }

    async fn list_friends(&self, user: ID<Member>) -> Result<Vec<Member>, StoreError> {
        let friends = self.friends.lock().unwrap();
        let users = self.users.lock().unwrap();
        Ok(friends
            .get(&user)
            .into_iter()
            .flatten()
            .filter_map(|id| users.get(id).map(|(m, _, _)| m.clone()))
            .collect())
    }

    async fn leaderboard(&self, limit: i64) -> Result<Vec<(Member, Chips)>, StoreError> {
        let users = self.users.lock().unwrap();
        let mut all: Vec<(Member, Chips)> = users
            .values()
            .map(|(m, _, balance)| (m.clone(), *balance))
            .collect();
        all.sort_unstable_by(|a, b| b.1.cmp(&a.1));
        all.truncate(limit.max(0) as usize);
        Ok(all)
    }

    async fn record_hand(
        &self,
        hand: &HandRecord,
        participants: &[ParticipantRecord],
        plays: &[PlayRecord],
    ) -> Result<(), StoreError> {
        self.hands
            .lock()
            .unwrap()
            .push((hand.clone(), participants.to_vec(), plays.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pk_core::ID;

    fn member(username: &str) -> Member {
        Member::new(ID::default(), username.into(), format!("{username}@example.com"))
    }

    #[tokio::test]
    async fn create_then_find_user_round_trips() {
        let store = MemStore::new();
        let alice = member("alice");
        store.create_user(&alice, "hashed").await.unwrap();

        let (found, hashword) = store.find_user_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.id(), alice.id());
        assert_eq!(hashword, "hashed");
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let store = MemStore::new();
        store.create_user(&member("bob"), "h1").await.unwrap();
        let err = store.create_user(&member("bob"), "h2").await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict));
    }

    #[tokio::test]
    async fn balance_adjustments_accumulate() {
        let store = MemStore::new();
        let alice = member("alice");
        store.create_user(&alice, "h").await.unwrap();
        store.adjust_balance(alice.id(), 500).await.unwrap();
        let balance = store.adjust_balance(alice.id(), -120).await.unwrap();
        assert_eq!(balance, 380);
        assert_eq!(store.get_balance(alice.id()).await.unwrap(), 380);
    }

    #[tokio::test]
    async fn friend_list_reflects_add_and_remove() {
        let store = MemStore::new();
        let alice = member("alice");
        let bob = member("bob");
        store.create_user(&alice, "h").await.unwrap();
        store.create_user(&bob, "h").await.unwrap();
        store.add_friend(alice.id(), bob.id()).await.unwrap();
        assert_eq!(store.list_friends(alice.id()).await.unwrap().len(), 1);
        store.remove_friend(alice.id(), bob.id()).await.unwrap();
        assert!(store.list_friends(alice.id()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn leaderboard_is_sorted_by_balance_descending() {
        let store = MemStore::new();
        let alice = member("alice");
        let bob = member("bob");
        store.create_user(&alice, "h").await.unwrap();
        store.create_user(&bob, "h").await.unwrap();
        store.adjust_balance(alice.id(), 100).await.unwrap();
        store.adjust_balance(bob.id(), 900).await.unwrap();

        let board = store.leaderboard(10).await.unwrap();
        assert_eq!(board[0].0.id(), bob.id());
        assert_eq!(board[1].0.id(), alice.id());
    }
}

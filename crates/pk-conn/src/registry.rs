use crate::ConnectionData;
use pk_core::Unique;
use pk_core::ID;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::RwLock;

type Shared = Arc<Mutex<ConnectionData>>;

/// Process-wide lookup from lowercased username to connection, so friend and
/// table-invite handlers can reach an online user without scanning every
/// socket. Mutated only by connection-lifecycle events (auth succeeds,
/// socket closes); a single `RwLock` is the whole concurrency discipline.
#[derive(Default)]
pub struct ConnRegistry {
    by_username: RwLock<HashMap<String, Shared>>,
    by_id: RwLock<HashMap<ID<ConnectionData>, Shared>>,
}

impl ConnRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, conn: Shared) {
        let (id, username) = {
            let guard = conn.lock().await;
            (guard.id(), guard.user().username().map(str::to_lowercase))
        };
        self.by_id.write().await.insert(id, conn.clone());
        if let Some(username) = username {
            self.by_username.write().await.insert(username, conn);
        }
        log::debug!("[conn-registry] registered connection {}", id);
    }

    /// Call after a connection authenticates, so its username becomes
    /// reachable for invites. `insert` alone only indexes by connection id.
    pub async fn bind_username(&self, username: &str, conn: Shared) {
        self.by_username
            .write()
            .await
            .insert(username.to_lowercase(), conn);
    }

    pub async fn remove(&self, id: ID<ConnectionData>) {
        let username = {
            if let Some(conn) = self.by_id.write().await.remove(&id) {
                conn.lock().await.user().username().map(str::to_lowercase)
            } else {
                None
            }
        };
        if let Some(username) = username {
            self.by_username.write().await.remove(&username);
        }
        log::debug!("[conn-registry] deregistered connection {}", id);
    }

    pub async fn find_by_username(&self, username: &str) -> Option<Shared> {
        self.by_username
            .read()
            .await
            .get(&username.to_lowercase())
            .cloned()
    }

    pub async fn find_by_id(&self, id: ID<ConnectionData>) -> Option<Shared> {
        self.by_id.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.by_id.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pk_auth::Member;
    use pk_auth::User;
    use tokio::sync::mpsc::channel;

    async fn authed(username: &str) -> Shared {
        let (tx, _rx) = channel(8);
        let mut conn = ConnectionData::new(tx);
        let member = Member::new(ID::default(), username.into(), "x@example.com".into());
        conn.authenticate(User::from(member), 500);
        Arc::new(Mutex::new(conn))
    }

    #[tokio::test]
    async fn lookup_by_username_is_case_insensitive() {
        let registry = ConnRegistry::new();
        let conn = authed("Alice").await;
        registry.bind_username("Alice", conn.clone()).await;
        registry.insert(conn).await;
        assert!(registry.find_by_username("alice").await.is_some());
        assert!(registry.find_by_username("ALICE").await.is_some());
        assert!(registry.find_by_username("bob").await.is_none());
    }

    #[tokio::test]
    async fn remove_drops_both_indices() {
        let registry = ConnRegistry::new();
        let conn = authed("carol").await;
        let id = conn.lock().await.id();
        registry.bind_username("carol", conn.clone()).await;
        registry.insert(conn).await;
        assert_eq!(registry.len().await, 1);

        registry.remove(id).await;
        assert!(registry.is_empty().await);
        assert!(registry.find_by_username("carol").await.is_none());
    }
}

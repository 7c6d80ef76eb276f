//! In-memory user store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::AppResult;
use domain::User;

use super::UserRepository;

/// `HashMap`-backed implementation of [`UserRepository`].
///
/// Every call takes the lock exactly once, so each operation is atomic:
/// writes are exclusive, reads may overlap.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            users: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Create a store pre-seeded with records; later duplicates win
    pub fn seeded(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.id().to_string(), user))
            .collect();

        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn get(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn put(&self, user: User) -> AppResult<()> {
        self.users.write().await.insert(user.id().to_string(), user);
        Ok(())
    }

    async fn remove(&self, id: &str) -> AppResult<bool> {
        Ok(self.users.write().await.remove(id).is_some())
    }

    async fn contains(&self, id: &str) -> AppResult<bool> {
        Ok(self.users.read().await.contains_key(id))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.users.read().await.len())
    }
}

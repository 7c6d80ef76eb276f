//! Directory service - Lookup, enumeration, upsert, deletion and existence
//! checks over user records.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use common::{AppError, AppResult, OptionExt};
use domain::User;

use crate::config::DirectoryConfig;
use crate::repository::{InMemoryUserStore, UserRepository};

/// Directory capability set, independent of the backing store.
///
/// Only `find_by_id` reports absence as an error. `delete` of an unknown
/// identity is a no-op and `exists` answers `false`. Every method returns
/// `AppResult` so a non-memory backing can surface `AppError::Storage`.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Get the record with this identity, or `AppError::NotFound`
    async fn find_by_id(&self, id: &str) -> AppResult<User>;

    /// List every stored record (order unspecified)
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Insert the record, or replace the one with the same identity
    async fn save(&self, user: User) -> AppResult<()>;

    /// Remove the record with this identity if present
    async fn delete(&self, id: &str) -> AppResult<()>;

    /// Check whether a record with this identity is stored
    async fn exists(&self, id: &str) -> AppResult<bool>;
}

/// Concrete implementation of DirectoryService using a repository.
#[derive(Clone)]
pub struct UserDirectory {
    repo: Arc<dyn UserRepository>,
}

impl UserDirectory {
    /// Create new directory over the given repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Create an empty directory backed by an in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserStore::new()))
    }

    /// Create an in-memory directory sized from configuration
    pub fn from_config(config: &DirectoryConfig) -> Self {
        info!(
            service = %config.service_name,
            initial_capacity = config.initial_capacity,
            "Creating in-memory user directory"
        );
        Self::new(Arc::new(InMemoryUserStore::with_capacity(
            config.initial_capacity,
        )))
    }

    /// Number of stored records
    pub async fn len(&self) -> AppResult<usize> {
        self.repo.count().await
    }

    /// Check if the directory holds no records
    pub async fn is_empty(&self) -> AppResult<bool> {
        Ok(self.len().await? == 0)
    }
}

#[async_trait]
impl DirectoryService for UserDirectory {
    async fn find_by_id(&self, id: &str) -> AppResult<User> {
        debug!(user_id = %id, "Looking up user");
        self.repo.get(id).await?.ok_or_not_found()
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = self.repo.list().await?;
        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    async fn save(&self, user: User) -> AppResult<()> {
        if user.id().trim().is_empty() {
            warn!("Rejected save of user with empty id");
            return Err(AppError::invalid_argument("user id must not be empty"));
        }

        info!(user_id = %user.id(), status = %user.status(), "Saving user");
        self.repo.put(user).await
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let removed = self.repo.remove(id).await?;
        info!(user_id = %id, removed, "Deleted user");
        Ok(())
    }

    async fn exists(&self, id: &str) -> AppResult<bool> {
        let present = self.repo.contains(id).await?;
        debug!(user_id = %id, present, "Checked user existence");
        Ok(present)
    }
}

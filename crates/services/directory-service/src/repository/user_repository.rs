//! User repository port.

use async_trait::async_trait;

use common::AppResult;
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Storage port for user records, keyed by identity.
///
/// Implementations only store and fetch; absence is reported as `None` or
/// `false`, never as an error. Errors are reserved for backing failures
/// and must surface as `AppError::Storage`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a copy of the record with this identity
    async fn get(&self, id: &str) -> AppResult<Option<User>>;

    /// Store a record, replacing any record with the same identity
    async fn put(&self, user: User) -> AppResult<()>;

    /// Remove a record; returns whether one was present
    async fn remove(&self, id: &str) -> AppResult<bool>;

    /// Check whether a record with this identity is stored
    async fn contains(&self, id: &str) -> AppResult<bool>;

    /// Copies of all stored records, in no particular order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Number of stored records
    async fn count(&self) -> AppResult<usize>;
}

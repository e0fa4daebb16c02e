//! Repository trait for alias → URL mappings.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::StorageError;
use async_trait::async_trait;

/// Storage capability for URL mappings.
///
/// Every operation runs in its own transaction.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::DuplicateAlias`] if the alias is already taken.
    /// Nothing is written in that case.
    ///
    /// Returns [`StorageError::Database`] on any other failure; the
    /// transaction is rolled back.
    async fn save(&self, new_mapping: NewUrlMapping) -> Result<i64, StorageError>;

    /// Finds the mapping stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no row matches.
    /// Returns [`StorageError::Database`] on read failures.
    async fn find_by_alias(&self, alias: &str) -> Result<UrlMapping, StorageError>;
}

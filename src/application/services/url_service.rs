//! Mapping creation and lookup service.

use std::sync::Arc;

use crate::domain::entities::NewUrlMapping;
use crate::domain::repositories::UrlRepository;
use crate::error::StorageError;

/// Thin orchestration between HTTP handlers and storage.
///
/// Performs no locking of its own; concurrent saves for the same alias are
/// resolved by the storage uniqueness constraint.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
}

impl UrlService {
    /// Creates a new service over the given repository.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Stores `target_url` under `alias` and returns the internal id.
    ///
    /// # Errors
    ///
    /// Propagates [`StorageError::DuplicateAlias`] and
    /// [`StorageError::Database`] from the repository.
    pub async fn save_url(&self, target_url: &str, alias: &str) -> Result<i64, StorageError> {
        tracing::debug!(url = target_url, alias, "saving url");

        let id = self
            .repository
            .save(NewUrlMapping::new(target_url, alias))
            .await?;

        tracing::debug!(id, alias, "saved url");
        Ok(id)
    }

    /// Resolves `alias` to its target URL.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] for unknown aliases.
    pub async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        tracing::debug!(alias, "looking up url");

        let mapping = self.repository.find_by_alias(alias).await?;

        tracing::debug!(id = mapping.id, url = %mapping.target_url, alias, "found url");
        Ok(mapping.target_url)
    }
}

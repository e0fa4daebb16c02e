#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use tempfile::TempDir;
use url_shortener::application::services::{AuthService, UrlService};
use url_shortener::domain::entities::{NewUrlMapping, UrlMapping};
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::error::StorageError;
use url_shortener::infrastructure::persistence::SqliteUrlRepository;
use url_shortener::state::AppState;

pub const TEST_USER: &str = "myuser";
pub const TEST_PASSWORD: &str = "mypass";
pub const ALIAS_LENGTH: usize = 10;

/// `Authorization` header value for `myuser:mypass`.
pub const VALID_AUTH: &str = "Basic bXl1c2VyOm15cGFzcw==";
/// `Authorization` header value for `myuser:wrong`.
pub const WRONG_PASSWORD_AUTH: &str = "Basic bXl1c2VyOndyb25n";
/// `Authorization` header value for `other:mypass`.
pub const WRONG_USER_AUTH: &str = "Basic b3RoZXI6bXlwYXNz";

/// Opens a fresh database file inside a temporary directory.
///
/// The directory is removed when the returned [`TempDir`] is dropped.
pub async fn create_test_repository() -> (TempDir, Arc<SqliteUrlRepository>) {
    let dir = TempDir::new().unwrap();
    let repo = SqliteUrlRepository::connect(dir.path().join("storage.db"))
        .await
        .unwrap();
    (dir, Arc::new(repo))
}

pub async fn create_test_mapping(repo: &SqliteUrlRepository, url: &str, alias: &str) -> i64 {
    repo.save(NewUrlMapping::new(url, alias)).await.unwrap()
}

pub async fn count_mappings(repo: &SqliteUrlRepository) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url")
        .fetch_one(repo.pool())
        .await
        .unwrap()
}

pub fn create_test_state(repo: Arc<dyn UrlRepository>) -> AppState {
    AppState::new(
        Arc::new(UrlService::new(repo)),
        Arc::new(AuthService::new(TEST_USER, TEST_PASSWORD)),
        ALIAS_LENGTH,
    )
}

/// Repository whose every operation fails with a database error.
pub struct FailingRepository;

#[async_trait]
impl UrlRepository for FailingRepository {
    async fn save(&self, _new_mapping: NewUrlMapping) -> Result<i64, StorageError> {
        Err(StorageError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_alias(&self, _alias: &str) -> Result<UrlMapping, StorageError> {
        Err(StorageError::Database(sqlx::Error::PoolTimedOut))
    }
}

//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};
use std::path::Path;
use std::time::Duration;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::{StorageError, is_unique_violation};

const CREATE_URL_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS url(
        id INTEGER PRIMARY KEY,
        alias TEXT NOT NULL UNIQUE,
        url TEXT NOT NULL)
"#;

const CREATE_ALIAS_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_alias ON url(alias)";

/// Concurrent writers wait this long for the write lock before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const MAX_CONNECTIONS: u32 = 4;

/// SQLite repository for alias → URL mappings.
///
/// Each operation acquires its own transaction. A transaction that is not
/// committed is rolled back, either explicitly on the error path or when the
/// handle is dropped.
pub struct SqliteUrlRepository {
    pool: SqlitePool,
}

impl SqliteUrlRepository {
    /// Opens (or creates) the database at `path` and prepares the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Initialization`] if the file cannot be opened
    /// or the table and index cannot be created.
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let init_error = |source: sqlx::Error| StorageError::Initialization {
            path: path.display().to_string(),
            source,
        };

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(init_error)?;

        let mut tx = pool.begin().await.map_err(init_error)?;
        sqlx::query(CREATE_URL_TABLE)
            .execute(&mut *tx)
            .await
            .map_err(init_error)?;
        sqlx::query(CREATE_ALIAS_INDEX)
            .execute(&mut *tx)
            .await
            .map_err(init_error)?;
        tx.commit().await.map_err(init_error)?;

        tracing::debug!(path = %path.display(), "storage initialized");

        Ok(Self { pool })
    }

    /// Returns the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes every pooled connection, waiting for in-flight operations.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

async fn rollback(tx: Transaction<'_, Sqlite>) {
    if let Err(e) = tx.rollback().await {
        tracing::warn!(error = %e, "rollback transaction failed");
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn save(&self, new_mapping: NewUrlMapping) -> Result<i64, StorageError> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query("INSERT INTO url(alias, url) VALUES (?, ?)")
            .bind(&new_mapping.alias)
            .bind(&new_mapping.target_url)
            .execute(&mut *tx)
            .await;

        match inserted {
            Ok(result) => {
                tx.commit().await?;
                Ok(result.last_insert_rowid())
            }
            Err(e) => {
                rollback(tx).await;
                if is_unique_violation(&e) {
                    Err(StorageError::DuplicateAlias(new_mapping.alias))
                } else {
                    Err(e.into())
                }
            }
        }
    }

    async fn find_by_alias(&self, alias: &str) -> Result<UrlMapping, StorageError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, UrlMapping>("SELECT id, alias, url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(&mut *tx)
            .await;

        match row {
            Ok(Some(mapping)) => {
                tx.commit().await?;
                Ok(mapping)
            }
            Ok(None) => {
                rollback(tx).await;
                Err(StorageError::NotFound(alias.to_string()))
            }
            Err(e) => {
                rollback(tx).await;
                Err(e.into())
            }
        }
    }
}

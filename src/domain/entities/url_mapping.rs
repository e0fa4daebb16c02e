//! URL mapping entity.

/// A persisted mapping between an alias and its target URL.
///
/// `id` is assigned by storage on insert and is only used for internal
/// logging; it is never returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlMapping {
    pub id: i64,
    pub alias: String,
    #[sqlx(rename = "url")]
    pub target_url: String,
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub alias: String,
    pub target_url: String,
}

impl NewUrlMapping {
    pub fn new(target_url: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            target_url: target_url.into(),
        }
    }
}

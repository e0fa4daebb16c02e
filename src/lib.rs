//! # URL Shortener
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Mapping entity and repository trait
//! - **Application Layer** ([`application`]) - URL and auth services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//!
//! ## HTTP Surface
//!
//! - `POST /save` (basic auth) - `{"target-url": "...", "alias": "..."}`
//!   → `{"status": "OK", "alias": "..."}`
//! - `GET /{alias}` - `302 Found` to the stored URL
//!
//! Errors are reported as `{"status": "Error", "error": "..."}` with HTTP 200.
//!
//! ## Quick Start
//!
//! ```bash
//! export HTTP_SERVER_PASSWORD="secret"   # optional override
//! cargo run -- --config ./configs/local.yaml
//! ```
//!
//! ## Configuration
//!
//! See [`config`] for the file format.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::{AppError, StorageError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, UrlService};
    pub use crate::domain::entities::{NewUrlMapping, UrlMapping};
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::{AppError, StorageError};
    pub use crate::infrastructure::persistence::SqliteUrlRepository;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}

//! Application layer services.
//!
//! Services consume repository traits and provide a narrow API for HTTP
//! handlers and middleware.
//!
//! - [`services::url_service::UrlService`] - Mapping creation and lookup
//! - [`services::auth_service::AuthService`] - Basic-auth credential check

pub mod services;

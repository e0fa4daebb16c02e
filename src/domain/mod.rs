//! Domain layer containing the mapping entity and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Implementations of [`repositories::UrlRepository`] live in
//! [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;

//! Repository trait definitions for the domain layer.
//!
//! The HTTP layer depends only on [`UrlRepository`], so storage can be swapped
//! for an in-memory fake in tests. A `mockall` mock is generated under
//! `cfg(test)`.

pub mod url_repository;

pub use url_repository::UrlRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;

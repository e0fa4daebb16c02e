//! HTTP middleware for request processing and protection.
//!
//! Layered outermost first: [`request_id`] → [`tracing`] → [`auth`]
//! (save route only).

pub mod auth;
pub mod request_id;
pub mod tracing;

//! HTTP layer: request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Request body and response envelope
//! - [`handlers`] - Save and redirect handlers
//! - [`middleware`] - Request id, request logging and basic auth

pub mod dto;
pub mod handlers;
pub mod middleware;

//! Router configuration.
//!
//! # Route Structure
//!
//! - `/save`      - Save a mapping (`POST`, basic auth)
//! - `/{alias}`   - Redirect to the stored URL (`GET`, public)
//!
//! Both routes accept every method so handlers can answer unsupported
//! methods inside the JSON envelope.
//!
//! # Middleware
//!
//! - **Request id** - Tags each request and echoes `x-request-id`
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Basic auth on `POST /save`

use crate::api::handlers::{redirect_handler, save_handler};
use crate::api::middleware::{auth, request_id, tracing};
use crate::state::AppState;
use axum::routing::any;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let save_router = Router::new()
        .route("/save", any(save_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .merge(save_router)
        .route("/", any(redirect_handler))
        .route("/{*alias}", any(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
        .layer(middleware::from_fn(request_id::layer))
}

//! Basic authentication middleware for the save route.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Authenticates `POST` requests using HTTP Basic credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic <base64(username:password)>
/// ```
///
/// Requests with any other method pass through untouched so the handler can
/// report the unsupported method.
///
/// # Errors
///
/// Returns `401 Unauthorized` with body `Unauthorized` if the header is
/// missing, malformed, or the credentials do not match. The handler is not
/// invoked.
///
/// # Example
///
/// ```rust,ignore
/// let save = Router::new()
///     .route("/save", any(save_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() != Method::POST {
        return Ok(next.run(req).await);
    }

    let (mut parts, body) = req.into_parts();

    let AuthBasic((username, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            tracing::warn!("authorization header is missing or invalid");
            AppError::Unauthorized
        })?;

    if !st
        .auth_service
        .are_credentials_valid(&username, password.as_deref().unwrap_or_default())
    {
        tracing::warn!(username = %username, "invalid credentials");
        return Err(AppError::Unauthorized);
    }

    tracing::debug!("credentials are valid");

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

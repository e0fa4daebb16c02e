//! Handler for the save endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::Method,
};
use validator::Validate;

use crate::api::dto::response::ApiResponse;
use crate::api::dto::save::SaveRequest;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::alias_generator::{generate_alias, is_reserved};

/// Stores a target URL under a client-supplied or generated alias.
///
/// # Endpoint
///
/// `POST /save` (basic auth required)
///
/// # Request Body
///
/// ```json
/// {"target-url": "https://example.com", "alias": "my-link"}
/// ```
///
/// The body is parsed as JSON regardless of `Content-Type`. Bodies over the
/// default 2 MB limit are rejected as `wrong request format`.
///
/// # Response
///
/// ```json
/// {"status": "OK", "alias": "my-link"}
/// ```
///
/// # Errors
///
/// Reported in the envelope with HTTP 200:
/// - `Not supported request type: <METHOD>` for non-POST requests
/// - `wrong request format` for malformed JSON, an invalid or empty
///   `target-url`, or a reserved alias
/// - `couldn't save url` for any storage failure, including a taken alias
#[tracing::instrument(name = "save_url", skip_all)]
pub async fn save_handler(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ApiResponse>, AppError> {
    if method != Method::POST {
        tracing::info!(%method, "not supported request type");
        return Err(AppError::UnsupportedMethod(method));
    }

    let body = body.map_err(|e| {
        tracing::error!(error = %e, "couldn't read request body");
        AppError::InvalidRequest
    })?;

    let request: SaveRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "wrong request");
        AppError::InvalidRequest
    })?;

    request.validate().map_err(|e| {
        tracing::error!(error = %e, "invalid request");
        AppError::InvalidRequest
    })?;

    if request.target_url.is_empty() {
        tracing::error!("field target-url must not be empty");
        return Err(AppError::InvalidRequest);
    }

    let alias = match request.requested_alias() {
        Some(alias) if is_reserved(alias) => {
            tracing::error!(alias, "alias is reserved");
            return Err(AppError::InvalidRequest);
        }
        Some(alias) => alias.to_string(),
        None => generate_alias(state.alias_length),
    };

    let id = state
        .url_service
        .save_url(&request.target_url, &alias)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "couldn't save url");
            AppError::SaveFailed
        })?;

    tracing::debug!(id, alias = %alias, "saved with id");

    Ok(Json(ApiResponse::ok().with_alias(alias)))
}

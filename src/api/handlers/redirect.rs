//! Handler for alias redirects.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its target URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// The alias is the percent-decoded request path after the leading `/`,
/// followed by `?` and the raw query string when one is present, so any
/// alias accepted by `/save` can be requested back.
///
/// # Response
///
/// `302 Found` with a `Location` header pointing at the stored URL.
///
/// # Errors
///
/// Reported in the envelope with HTTP 200:
/// - `Not supported request type: <METHOD>` for non-GET requests
/// - `empty alias` for `GET /`
/// - `couldn't find given alias` for unknown aliases and storage failures
#[tracing::instrument(name = "redirect", skip_all)]
pub async fn redirect_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    if method != Method::GET {
        tracing::info!(%method, "not supported request type");
        return Err(AppError::UnsupportedMethod(method));
    }

    let alias = match path {
        Ok(Path(path)) => match uri.query() {
            Some(query) => format!("{path}?{query}"),
            None => path,
        },
        Err(PathRejection::MissingPathParams(_)) => String::new(),
        Err(e) => {
            tracing::error!(error = %e, path = %uri.path(), "couldn't decode alias");
            return Err(AppError::AliasNotFound);
        }
    };
    if alias.is_empty() {
        tracing::error!("alias is empty");
        return Err(AppError::EmptyAlias);
    }
    let alias = alias.as_str();

    let target_url = state.url_service.get_url(alias).await.map_err(|e| {
        tracing::error!(error = %e, alias, "couldn't find url");
        AppError::AliasNotFound
    })?;

    let location = HeaderValue::from_bytes(target_url.as_bytes()).map_err(|e| {
        tracing::error!(error = %e, url = %target_url, "stored url is not a valid Location");
        AppError::AliasNotFound
    })?;

    tracing::debug!(url = %target_url, alias, "found url for given alias");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

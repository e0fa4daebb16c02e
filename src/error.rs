//! Error taxonomy for storage and HTTP handling.
//!
//! Storage failures are described by [`StorageError`]. Handlers translate them
//! into [`AppError`], which renders a fixed client-facing message and never
//! exposes driver or schema details.

use axum::{
    Json,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::dto::response::ApiResponse;

/// Errors raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store could not be opened or its schema prepared.
    #[error("couldn't initialize storage at {path}: {source}")]
    Initialization {
        path: String,
        #[source]
        source: sqlx::Error,
    },

    /// The alias is already taken; detected by the unique constraint.
    #[error("couldn't insert given alias ({0}) as it already exists")]
    DuplicateAlias(String),

    /// No mapping exists for the alias.
    #[error("no alias found ({0})")]
    NotFound(String),

    /// Any other transactional failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Errors produced while handling an HTTP request.
///
/// All variants except [`AppError::Unauthorized`] are reported inside the JSON
/// envelope with HTTP 200. Internal causes are logged by the handler and are
/// not carried here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not supported request type: {0}")]
    UnsupportedMethod(Method),

    #[error("wrong request format")]
    InvalidRequest,

    #[error("empty alias")]
    EmptyAlias,

    #[error("couldn't save url")]
    SaveFailed,

    #[error("couldn't find given alias")]
    AliasNotFound,

    #[error("Unauthorized")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                [(
                    header::WWW_AUTHENTICATE,
                    HeaderValue::from_static(r#"Basic realm="url-shortener""#),
                )],
                "Unauthorized",
            )
                .into_response(),
            other => (StatusCode::OK, Json(ApiResponse::error(other.to_string()))).into_response(),
        }
    }
}

/// Returns true if the error is a unique constraint violation.
pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_messages_are_fixed() {
        assert_eq!(AppError::InvalidRequest.to_string(), "wrong request format");
        assert_eq!(AppError::EmptyAlias.to_string(), "empty alias");
        assert_eq!(AppError::SaveFailed.to_string(), "couldn't save url");
        assert_eq!(AppError::AliasNotFound.to_string(), "couldn't find given alias");
        assert_eq!(
            AppError::UnsupportedMethod(Method::PUT).to_string(),
            "Not supported request type: PUT"
        );
    }

    #[test]
    fn test_envelope_errors_use_status_ok() {
        let response = AppError::EmptyAlias.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_unauthorized_sets_challenge() {
        let response = AppError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
    }

    #[test]
    fn test_duplicate_alias_message_names_alias() {
        let err = StorageError::DuplicateAlias("abc".into());
        assert!(err.to_string().contains("(abc)"));
    }
}

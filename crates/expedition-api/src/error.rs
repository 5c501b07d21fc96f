//! Error types for the API server.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//!
//! Error kinds map to distinct statuses so callers can tell them apart:
//! validation failures (rejected before persistence) are 400, missing
//! entities are 404, foreign keys pointing at absent rows (caught by the
//! storage engine, not pre-validated) are 409, and everything else is a
//! 500. No failure is swallowed; every one is surfaced to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use expedition_db::DbError;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A write payload failed field-level validation. Detected before
    /// persistence, so nothing was written.
    #[error("validation failed")]
    Validation(#[from] validator::ValidationErrors),

    /// A foreign key referenced a row that does not exist.
    #[error("integrity error: {0}")]
    Integrity(String),

    /// A database operation failed.
    #[error("database error: {0}")]
    Database(DbError),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ForeignKey { constraint } => {
                Self::Integrity(format!("referenced row does not exist ({constraint})"))
            }
            other => Self::Database(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Validation responses carry the per-field messages as an array.
        if let Self::Validation(ref errors) = self {
            let body = serde_json::json!({
                "errors": validation_messages(errors),
                "status": StatusCode::BAD_REQUEST.as_u16(),
            });
            return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
        }

        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Integrity(msg) => (StatusCode::CONFLICT, msg.clone()),
            Self::Database(e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("database error"),
                )
            }
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            Self::Validation(_) => (
                StatusCode::BAD_REQUEST,
                String::from("validation errors"),
            ),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Flatten [`validator::ValidationErrors`] into human-readable messages.
fn validation_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map_or_else(|| format!("{field} is invalid"), ToString::to_string)
            })
        })
        .collect();
    messages.sort();
    messages
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use validator::Validate;

    use super::ApiError;
    use expedition_db::DbError;
    use expedition_types::NewScientist;

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound(String::from("scientist 7")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let errors = NewScientist {
            name: String::new(),
            field_of_study: String::from("Physics"),
        }
        .validate()
        .unwrap_err();
        let response = ApiError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn foreign_key_maps_to_409() {
        let err = ApiError::from(DbError::ForeignKey {
            constraint: String::from("fk_missions_planet_id_planets"),
        });
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn other_db_errors_map_to_500() {
        let err = ApiError::from(DbError::Config(String::from("bad url")));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

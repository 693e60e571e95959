use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

use wishlist_store::StoreError;
use wishlist_types::api::ErrorBody;

/// Errors returned by handlers. Rendered as `{"error": message}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Internal(detail) => {
                error!("Internal error: {}", detail);
                "internal server error".to_string()
            }
            other => {
                debug!("Request rejected with {}: {}", status, other);
                other.to_string()
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound(err.to_string()),
            StoreError::Conflict => ApiError::Conflict(err.to_string()),
            StoreError::Forbidden(msg) => ApiError::Forbidden(msg.to_string()),
            StoreError::Invalid(msg) => ApiError::Validation(msg.to_string()),
            StoreError::Poisoned => ApiError::Internal(err.to_string()),
        }
    }
}

/// Failures while resolving a caller from a token.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing authentication token")]
    MissingToken,

    #[error("malformed token")]
    InvalidToken,

    #[error("token does not match a known user")]
    UnknownUser,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Store(inner) => inner.into(),
            other => {
                debug!("Authentication failed: {}", other);
                ApiError::Unauthorized("Unauthorized".into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_mapping() {
        assert_eq!(
            ApiError::from(StoreError::NotFound("wishlist")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::from(StoreError::Conflict).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(StoreError::Forbidden("access denied")).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::from(StoreError::Invalid("cannot share with yourself")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(StoreError::Poisoned).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_pass_through() {
        assert_eq!(
            ApiError::from(StoreError::NotFound("item")).to_string(),
            "item not found"
        );
        assert_eq!(
            ApiError::from(StoreError::Forbidden("only owner can share wishlist")).to_string(),
            "only owner can share wishlist"
        );
    }

    #[test]
    fn test_auth_errors_are_unauthorized() {
        for err in [AuthError::MissingToken, AuthError::InvalidToken, AuthError::UnknownUser] {
            let api = ApiError::from(err);
            assert_eq!(api.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(api.to_string(), "Unauthorized");
        }
    }
}

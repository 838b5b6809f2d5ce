//! Error handling for the Biblio HTTP layer.
//!
//! Non-2xx responses carry the error as a plain-text body. Clients surface
//! that body verbatim as the failure message, so no JSON envelope here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use biblio_store::LibraryError;
use thiserror::Error;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types that map to HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Create a validation error (missing or malformed fields).
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a conflict error (a domain invariant refused the operation).
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}

impl From<LibraryError> for AppError {
    fn from(err: LibraryError) -> Self {
        match err {
            LibraryError::UserNotFound
            | LibraryError::BookNotFound
            | LibraryError::LoanNotFound => Self::NotFound(err.to_string()),
            LibraryError::BookNotAvailable
            | LibraryError::BookAlreadyLoaned
            | LibraryError::LoanOwnerMismatch
            | LibraryError::BookOnLoan
            | LibraryError::UserHasLoans => Self::Conflict(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();

        tracing::error!(
            status_code = %status.as_u16(),
            %message,
            "request error"
        );

        // Internal details stay out of release responses.
        let message = if cfg!(not(debug_assertions)) && status == StatusCode::INTERNAL_SERVER_ERROR
        {
            "internal server error".to_string()
        } else {
            message
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    #[test]
    fn error_response_status_mapping() {
        let mk = |e: AppError| e.into_response().status();
        assert_eq!(
            mk(AppError::validation("missing fields")),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            mk(AppError::conflict("book not available")),
            StatusCode::CONFLICT
        );
        assert_eq!(
            mk(AppError::not_found("book not found")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(mk(AppError::bad_request("missing id")), StatusCode::BAD_REQUEST);
        assert_eq!(
            mk(AppError::Internal(anyhow::anyhow!("boom"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn library_errors_map_to_not_found_or_conflict() {
        let not_found: AppError = LibraryError::BookNotFound.into();
        assert!(matches!(not_found, AppError::NotFound(_)));

        let conflict: AppError = LibraryError::BookNotAvailable.into();
        assert!(matches!(conflict, AppError::Conflict(_)));

        let conflict: AppError = LibraryError::UserHasLoans.into();
        assert!(matches!(conflict, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn error_body_is_the_plain_message() {
        let response = AppError::not_found("book not found").into_response();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"book not found");
    }
}

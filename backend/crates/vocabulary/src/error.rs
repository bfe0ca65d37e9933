//! Vocabulary Error Types
//!
//! Vocabulary-specific error variants. They reach the client through
//! [`crate::presentation::presenter::present_error`], which renders them as
//! `kernel::error::AppError` problem bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::VocabularyId;
use thiserror::Error;

/// Vocabulary-specific result type alias
pub type VocabResult<T> = Result<T, VocabError>;

#[derive(Debug, Error)]
pub enum VocabError {
    /// No vocabulary with this id
    #[error("Vocabulary not found: {0}")]
    NotFound(VocabularyId),

    /// Path id is not a UUID
    #[error("Invalid vocabulary id: {0}")]
    InvalidId(String),

    /// A field failed validation
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Request body could not be decoded
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl VocabError {
    pub(crate) fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        VocabError::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            VocabError::NotFound(_) => ErrorKind::NotFound,
            VocabError::InvalidId(_)
            | VocabError::InvalidField { .. }
            | VocabError::MalformedBody(_) => ErrorKind::BadRequest,
            VocabError::Database(_) | VocabError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Convert to AppError. Server-side details stay out of the message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            VocabError::Database(_) => AppError::internal("Database error"),
            VocabError::Internal(_) => AppError::internal("Internal error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    pub(crate) fn log(&self) {
        match self {
            VocabError::Database(e) => {
                tracing::error!(error = %e, "Vocabulary database error");
            }
            VocabError::Internal(msg) => {
                tracing::error!(message = %msg, "Vocabulary internal error");
            }
            VocabError::NotFound(id) => {
                tracing::debug!(vocabulary_id = %id, "Vocabulary not found");
            }
            _ => {
                tracing::debug!(error = %self, "Vocabulary request rejected");
            }
        }
    }
}

impl IntoResponse for VocabError {
    fn into_response(self) -> Response {
        crate::presentation::presenter::present_error(self)
    }
}

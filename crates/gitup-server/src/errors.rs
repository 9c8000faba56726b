//! Webhook errors.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Webhook error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Unknown repository.")]
    RepositoryNotFound,

    #[error("invalid signature header")]
    InvalidWebhookSignature,

    // Payload errors are reported as invalid signatures by the push handler.
    #[error("Payload is larger than {limit} bytes.")]
    PayloadTooLarge { limit: usize },

    #[error("Could not read payload: {source}")]
    PayloadError {
        source: actix_web::error::PayloadError,
    },

    #[error("{source}")]
    UpdateFailed { source: gitup_core::UpdateError },

    #[error("I/O error,\n  caused by: {}", source)]
    IoError { source: std::io::Error },
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match &self {
            ServerError::RepositoryNotFound => StatusCode::NOT_FOUND,
            ServerError::InvalidWebhookSignature => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // No detail on routing errors.
            ServerError::RepositoryNotFound => HttpResponse::NotFound().finish(),
            _ => HttpResponse::build(self.status_code())
                .content_type("text/plain; charset=utf-8")
                .body(self.to_string()),
        }
    }
}

/// Result alias for `ServerError`.
pub type Result<T> = core::result::Result<T, ServerError>;

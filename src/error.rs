use http::StatusCode;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Access denied: {reason}")]
    PermissionDenied { reason: &'static str },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl Error {
    /// Status, machine code, and message for the calling HTTP layer.
    ///
    /// `InvalidInput` means a caller or data bug (unrecognized role/status,
    /// missing record), not a permission question: it is logged here and
    /// surfaced as a server error so it cannot pass for an authorization
    /// decision.
    pub fn into_parts(self) -> (StatusCode, &'static str, String) {
        match &self {
            Error::PermissionDenied { .. } => {
                (StatusCode::FORBIDDEN, "FORBIDDEN", self.to_string())
            }
            Error::InvalidInput(msg) => {
                tracing::error!("Invalid input: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INVALID_INPUT",
                    "Internal server error".to_string(),
                )
            }
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            Error::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_FAILED",
                errors.to_string(),
            ),
            Error::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            Error::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::PermissionDenied { .. } => StatusCode::FORBIDDEN,
            Error::InvalidInput(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::BadRequest(_) | Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    pub fn to_body(self) -> serde_json::Value {
        let (_, code, message) = self.into_parts();
        json!({
            "error": {
                "code": code,
                "message": message,
            }
        })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

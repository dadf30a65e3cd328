use axum::http::StatusCode;

/// Common trait for all custom error types in the application
pub trait AppError: std::error::Error + Send + Sync + 'static {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get the error code for frontend handling
    fn error_code(&self) -> &'static str;

    /// Optional structured detail rendered next to the message
    fn detail(&self) -> Option<serde_json::Value> {
        None
    }
}

/// Macro to implement IntoResponse for all AppError types
/// This provides consistent HTTP response formatting
macro_rules! impl_into_response {
    ($error_type:ty) => {
        impl axum::response::IntoResponse for $error_type {
            fn into_response(self) -> axum::response::Response {
                use crate::errors::AppError;
                use axum::response::Json;

                let status = self.status_code();
                if status.is_server_error() {
                    tracing::error!(code = self.error_code(), "{}", self);
                } else {
                    tracing::warn!(code = self.error_code(), "{}", self);
                }

                let body = crate::models::ErrorResponse {
                    error: self.user_message(),
                    code: self.error_code().to_string(),
                    status: status.as_u16(),
                    detail: self.detail(),
                };

                (status, Json(body)).into_response()
            }
        }
    };
}

pub(crate) use impl_into_response;

/// Cut a message down to at most `max_chars` characters for client-facing output
pub fn truncate_message(message: &str, max_chars: usize) -> String {
    match message.char_indices().nth(max_chars) {
        Some((idx, _)) => message[..idx].to_string(),
        None => message.to_string(),
    }
}

// Submodules for entity-specific errors
pub mod store;
pub mod validation;

pub use store::StoreError;
pub use validation::{FieldError, ValidationError};

use axum::http::StatusCode;
use thiserror::Error;

use super::{truncate_message, AppError};

/// Longest underlying message passed through to clients
pub const MAX_DETAIL_CHARS: usize = 200;

/// Failures of the document store adapter
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Document store is not available: {reason}")]
    Unavailable { reason: String },

    #[error("Failed to read from collection '{collection}': {message}")]
    Read { collection: String, message: String },

    #[error("Failed to write to collection '{collection}': {message}")]
    Write { collection: String, message: String },

    #[error("Failed to encode document for collection '{collection}': {message}")]
    Encode { collection: String, message: String },
}

impl AppError for StoreError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn user_message(&self) -> String {
        match self {
            StoreError::Unavailable { .. } => "Database not available".to_string(),
            StoreError::Read { .. } => "Failed to read from database".to_string(),
            StoreError::Write { .. } | StoreError::Encode { .. } => {
                "Failed to write to database".to_string()
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StoreError::Unavailable { .. } => "STORE_UNAVAILABLE",
            StoreError::Read { .. } => "STORE_READ_FAILED",
            StoreError::Write { .. } => "STORE_WRITE_FAILED",
            StoreError::Encode { .. } => "STORE_ENCODE_FAILED",
        }
    }

    fn detail(&self) -> Option<serde_json::Value> {
        Some(serde_json::Value::String(truncate_message(
            &self.to_string(),
            MAX_DETAIL_CHARS,
        )))
    }
}

impl_into_response!(StoreError);

/// Convenience methods for creating common store errors
impl StoreError {
    pub fn unavailable<S: Into<String>>(reason: S) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn read<C: Into<String>, M: ToString>(collection: C, message: M) -> Self {
        Self::Read {
            collection: collection.into(),
            message: message.to_string(),
        }
    }

    pub fn write<C: Into<String>, M: ToString>(collection: C, message: M) -> Self {
        Self::Write {
            collection: collection.into(),
            message: message.to_string(),
        }
    }

    pub fn encode<C: Into<String>, M: ToString>(collection: C, message: M) -> Self {
        Self::Encode {
            collection: collection.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_is_a_server_error() {
        let errors = [
            StoreError::unavailable("DATABASE_URL not set"),
            StoreError::read("product", "timeout"),
            StoreError::write("appointment", "duplicate key"),
            StoreError::encode("product", "unsupported value"),
        ];
        for error in &errors {
            assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
        assert_eq!(errors[0].error_code(), "STORE_UNAVAILABLE");
        assert_eq!(errors[1].error_code(), "STORE_READ_FAILED");
        assert_eq!(errors[2].error_code(), "STORE_WRITE_FAILED");
    }

    #[test]
    fn test_detail_is_truncated() {
        let error = StoreError::read("product", "x".repeat(1000));
        let detail = error.detail().unwrap();
        assert_eq!(detail.as_str().unwrap().chars().count(), MAX_DETAIL_CHARS);
    }
}

//! API Response types
//!
//! Standardized API response structure used by every backend operation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard API response code
pub const API_CODE_SUCCESS: &str = "E0000";

/// Unified API response structure
///
/// All API responses follow this format:
/// ```json
/// {
///     "code": "E0000",
///     "message": "Success",
///     "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (E0000 = success, others = error codes)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Error surfaced by a well-formed but unsuccessful API response
#[derive(Debug, Clone, Error)]
#[error("{code}: {message}")]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            code: API_CODE_SUCCESS.to_string(),
            message: "Success".to_string(),
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }

    /// Whether the response indicates success
    pub fn is_success(&self) -> bool {
        self.code == API_CODE_SUCCESS
    }

    /// Unwrap the payload, turning error responses (and success responses
    /// that are missing their payload) into [`ApiError`]
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(ApiError {
                code: self.code,
                message: self.message,
            });
        }
        self.data.ok_or(ApiError {
            code: "E0001".to_string(),
            message: "Response missing data payload".to_string(),
        })
    }

    /// Acknowledgement check for operations with no meaningful payload
    pub fn into_ack(self) -> Result<(), ApiError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(ApiError {
                code: self.code,
                message: self.message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_unwraps_payload() {
        let resp = ApiResponse::ok(42u32);
        assert!(resp.is_success());
        assert_eq!(resp.into_result().unwrap(), 42);
    }

    #[test]
    fn error_response_surfaces_code_and_message() {
        let resp = ApiResponse::<u32>::error("E7001", "Table not found");
        let err = resp.into_result().unwrap_err();
        assert_eq!(err.code, "E7001");
        assert_eq!(err.message, "Table not found");
    }

    #[test]
    fn success_without_data_is_an_error() {
        let resp = ApiResponse::<u32> {
            code: API_CODE_SUCCESS.to_string(),
            message: "Success".to_string(),
            data: None,
        };
        assert!(resp.into_result().is_err());
    }
}

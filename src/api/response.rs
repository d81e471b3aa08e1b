//! Response types for the Vacation Alert Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::AlertError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a missing upload error response.
    pub fn missing_file() -> Self {
        Self::with_details(
            "MISSING_FILE",
            "No workbook file in request",
            "The multipart form must contain a 'file' field with the workbook",
        )
    }

    /// Creates an invalid upload error response.
    pub fn invalid_upload(message: impl Into<String>) -> Self {
        Self::new("INVALID_UPLOAD", message)
    }

    /// Creates an invalid query string error response.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::new("INVALID_QUERY", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response from an error body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<AlertError> for ApiErrorResponse {
    fn from(error: AlertError) -> Self {
        let message = error.to_string();
        let api_error = match error {
            AlertError::WorkbookParse { .. } => ApiError::with_details(
                "WORKBOOK_PARSE_ERROR",
                message,
                "The uploaded file is not a valid sectioned CSV workbook",
            ),
            AlertError::SheetNotFound { .. } => ApiError::with_details(
                "SHEET_NOT_FOUND",
                message,
                "The workbook must contain 'clients' and 'vacations' sheets",
            ),
            AlertError::MissingColumn { .. } => ApiError::new("MISSING_COLUMN", message),
            AlertError::InvalidNumber { .. } => ApiError::new("INVALID_NUMBER", message),
            AlertError::InvalidDate { .. } => ApiError::new("INVALID_DATE", message),
            AlertError::InvalidWindow { .. } => ApiError::new("INVALID_WINDOW", message),
        };

        // Every engine error stems from the uploaded data or the query, so
        // they all map to a client error.
        ApiErrorResponse::bad_request(api_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_missing_file_error() {
        let error = ApiError::missing_file();
        assert_eq!(error.code, "MISSING_FILE");
        assert!(error.details.is_some());
    }

    #[test]
    fn test_sheet_not_found_maps_to_400() {
        let alert_error = AlertError::SheetNotFound {
            name: "vacations".to_string(),
        };
        let response: ApiErrorResponse = alert_error.into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "SHEET_NOT_FOUND");
        assert!(response.error.message.contains("vacations"));
    }

    #[test]
    fn test_invalid_date_maps_to_400() {
        let alert_error = AlertError::InvalidDate {
            sheet: "vacations".to_string(),
            column: "due_by_date".to_string(),
            value: "soon".to_string(),
        };
        let response: ApiErrorResponse = alert_error.into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_DATE");
        assert!(response.error.message.contains("soon"));
    }
}

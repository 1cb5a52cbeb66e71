use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Failure body shared by every endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::to_string(&self).map_err(|_| fmt::Error)?)
    }
}

#[derive(Debug, PartialEq)]
pub enum ErrorMessage {
    NotAuthenticated,
    MethodNotAllowed,
    InvalidEmailFormat,
    InvalidTheme,
    InvalidSettingType,
    UserNotFound,
    InvalidRequestBody,
    DatabaseUnavailable,
    AddPropertyFailed,
    GetSettingsFailed,
    UpdateSettingsFailed,
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl ErrorMessage {
    fn to_str(&self) -> &'static str {
        match self {
            ErrorMessage::NotAuthenticated => "Not authenticated",
            ErrorMessage::MethodNotAllowed => "Method not allowed",
            ErrorMessage::InvalidEmailFormat => "Invalid email format",
            ErrorMessage::InvalidTheme => "Invalid theme",
            ErrorMessage::InvalidSettingType => "Invalid setting type",
            ErrorMessage::UserNotFound => "User not found",
            ErrorMessage::InvalidRequestBody => "Invalid request body",
            ErrorMessage::DatabaseUnavailable => "Database connection failed. Please try again later.",
            ErrorMessage::AddPropertyFailed => "Failed to add property",
            ErrorMessage::GetSettingsFailed => "An error occurred while retrieving user settings",
            ErrorMessage::UpdateSettingsFailed => "An error occurred while updating settings",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpError {
    pub message: String,
    pub status: StatusCode,
}

impl HttpError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        HttpError {
            message: message.into(),
            status,
        }
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::BAD_REQUEST)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::UNAUTHORIZED)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::NOT_FOUND)
    }

    pub fn method_not_allowed() -> Self {
        HttpError::new(
            ErrorMessage::MethodNotAllowed.to_string(),
            StatusCode::METHOD_NOT_ALLOWED,
        )
    }

    pub fn not_authenticated() -> Self {
        HttpError::unauthorized(ErrorMessage::NotAuthenticated.to_string())
    }

    pub fn into_http_response(self) -> Response {
        let json_response = Json(ErrorResponse {
            success: false,
            message: self.message.clone(),
        });

        (self.status, json_response).into_response()
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HttpError: message: {}, status: {}",
            self.message, self.status
        )
    }
}

impl std::error::Error for HttpError {}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_failure_envelope_shape() {
        let response = HttpError::not_authenticated().into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "success": false, "message": "Not authenticated" })
        );
    }

    #[test]
    fn test_error_message_display() {
        assert_eq!(ErrorMessage::NotAuthenticated.to_string(), "Not authenticated");
        assert_eq!(format!("{}", ErrorMessage::InvalidTheme), "Invalid theme");
    }

    #[test]
    fn test_method_not_allowed_message() {
        let err = HttpError::method_not_allowed();
        assert_eq!(err.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.message, "Method not allowed");
    }
}

use thiserror::Error;

use crate::error::{ErrorMessage, HttpError};

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Database connection error: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Validation(String),

    #[error("User {0} not found")]
    UserNotFound(i64),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation(message.into())
    }

    /// Converts to the client envelope. Validation text is client-correctable
    /// and goes out verbatim; everything else is logged here and replaced by
    /// `fallback`, or by the connection policy of the active profile.
    pub fn into_http(self, fallback: ErrorMessage, production: bool) -> HttpError {
        match self {
            ServiceError::Validation(message) => HttpError::bad_request(message),
            ServiceError::UserNotFound(user_id) => {
                tracing::debug!(user_id, "settings requested for missing or inactive user");
                HttpError::not_found(ErrorMessage::UserNotFound.to_string())
            }
            ServiceError::Connection(e) => {
                tracing::error!("Database connection error: {}", e);
                if production {
                    HttpError::server_error(ErrorMessage::DatabaseUnavailable.to_string())
                } else {
                    HttpError::server_error(format!("Connection error: {}", e))
                }
            }
            ServiceError::Database(e) => {
                tracing::error!("{}: {}", fallback.to_string(), e);
                HttpError::server_error(fallback.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_validation_text_is_surfaced() {
        let err = ServiceError::validation("Street is required, City is required")
            .into_http(ErrorMessage::AddPropertyFailed, true);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Street is required, City is required");
    }

    #[test]
    fn test_database_error_is_not_leaked() {
        let err = ServiceError::Database(sqlx::Error::RowNotFound)
            .into_http(ErrorMessage::AddPropertyFailed, false);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Failed to add property");
    }

    #[test]
    fn test_connection_error_depends_on_profile() {
        let production = ServiceError::Connection(sqlx::Error::PoolTimedOut)
            .into_http(ErrorMessage::GetSettingsFailed, true);
        assert_eq!(
            production.message,
            "Database connection failed. Please try again later."
        );

        let local = ServiceError::Connection(sqlx::Error::PoolTimedOut)
            .into_http(ErrorMessage::GetSettingsFailed, false);
        assert!(local.message.starts_with("Connection error: "));
    }

    #[test]
    fn test_missing_user() {
        let err = ServiceError::UserNotFound(3).into_http(ErrorMessage::GetSettingsFailed, true);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "User not found");
    }
}

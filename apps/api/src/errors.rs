use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant is a client error: a rejected request never touches the store.
#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    #[error("No data provided")]
    NoData,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("{0}")]
    InvalidField(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NoData | AppError::MissingFields(_) | AppError::InvalidField(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_names_every_field() {
        let err = AppError::MissingFields(vec!["name".to_string(), "logo".to_string()]);
        assert_eq!(err.to_string(), "Missing required fields: name, logo");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_message() {
        let err = AppError::NotFound("Skill".to_string());
        assert_eq!(err.to_string(), "Skill not found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_no_data_is_distinct_from_missing_fields() {
        assert_ne!(AppError::NoData.to_string(), AppError::MissingFields(vec![]).to_string());
        assert_eq!(AppError::NoData.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_method_not_allowed_status() {
        assert_eq!(
            AppError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}

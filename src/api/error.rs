use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

use crate::repository::employee::RepositoryError;

pub const EMPLOYEE_NOT_FOUND: &str = "employee.name tidak ditemukan";

/// Failures of the employee endpoints, rendered as `{"error": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The store rejected or failed the lookup. The driver text is passed through.
    #[error("{0}")]
    Query(String),

    #[error("{}", EMPLOYEE_NOT_FOUND)]
    NotFound,
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        ApiError::Query(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Query(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string()
        }))
    }
}

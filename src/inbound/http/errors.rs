use crate::domain::contact::ports::ContactServiceError;
use crate::inbound::http::responses::ApiResponse;

use actix_web::HttpResponse;
use actix_web::{http::StatusCode, ResponseError};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<ContactServiceError> for AppError {
    fn from(error: ContactServiceError) -> Self {
        match error {
            ContactServiceError::ValidationError(e) => AppError::ValidationError(e.to_string()),
            ContactServiceError::Unexpected(e) => AppError::Unexpected(e),
            // Repository and notifier failures happen after the request was
            // accepted; they are server-side faults, never the caller's.
            other => AppError::Unexpected(anyhow::Error::new(other)),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse<actix_web::body::BoxBody> {
        match self {
            AppError::ValidationError(message) => {
                HttpResponse::BadRequest().json(ApiResponse::failure(message))
            }
            AppError::Unexpected(_) => {
                HttpResponse::InternalServerError().json(ApiResponse::failure("Server error"))
            }
        }
    }
}

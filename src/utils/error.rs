use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    AccessDenied,
    MissingQuery,
    QueryTooLong,
    InvalidQuery,
    InvalidCharacter(char),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::AccessDenied => write!(f, "Access denied"),
            AppError::MissingQuery => write!(f, "Missing query parameter"),
            AppError::QueryTooLong => write!(f, "Query parameter too long"),
            AppError::InvalidQuery => write!(f, "Invalid query parameter"),
            AppError::InvalidCharacter(c) => write!(f, "invalid character: {}", c),
        }
    }
}

impl std::error::Error for AppError {}

// Failures go out as plain text; only successful evaluations are JSON.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::AccessDenied => StatusCode::FORBIDDEN,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

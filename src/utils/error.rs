use std::fmt;

use actix_web::http::StatusCode;

/// Everything a handler can fail with. The detail strings are for logs only;
/// clients see the fixed `message()`/`code()` pair.
#[derive(Debug)]
pub enum AppError {
    Decode(String),
    InvalidInput(String),
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Decode(_) | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Decode(_) => "unexpected_error",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::NotFound(_) => "user_not_found",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AppError::Decode(_) => "Something unexpected happened. Please try again",
            AppError::InvalidInput(_) => "Please enter valid user details",
            AppError::NotFound(_) => "User not found",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::NotFound(id) => write!(f, "User not found: {}", id),
        }
    }
}

impl std::error::Error for AppError {}

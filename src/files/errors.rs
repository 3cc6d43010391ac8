use axum::http::StatusCode;
use thiserror::Error;

use crate::{app::models::api_error::ApiError, tokens::TokenError};

/// Root causes of a failed listing. Logged, never shown to callers.
#[derive(Debug, Error)]
pub enum FilesError {
    #[error("could not obtain bearer credential: {0}")]
    Token(#[from] TokenError),
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream answered with status {0}")]
    Status(StatusCode),
    #[error("upstream answered with malformed JSON: {0}")]
    Body(#[from] serde_json::Error),
}

#[derive(Debug)]
pub enum FilesApiError {
    FetchFailed,
}

impl FilesApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::FetchFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to fetch data from API".to_string(),
            },
        }
    }
}

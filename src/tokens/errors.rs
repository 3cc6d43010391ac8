use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("no bearer credential is configured")]
    NotConfigured,
    #[error("bearer credential is empty")]
    Empty,
    #[error("token endpoint request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("token endpoint answered with status {0}")]
    Status(StatusCode),
    #[error("token endpoint answered with a malformed body: {0}")]
    Body(#[from] serde_json::Error),
    #[error("token endpoint answered with no tokens")]
    NoTokens,
}

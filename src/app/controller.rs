use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::AppState;

use super::{enums::api_status::ApiStatus, errors::DefaultApiError, models::api_error::ApiError};

pub async fn get_root(State(_state): State<Arc<AppState>>) -> Result<(), ApiError> {
    Ok(())
}

/// Ready once a credential strategy is configured. Never calls upstream.
pub async fn get_ready(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    let status = if state.token_source.is_configured() {
        ApiStatus::Ready
    } else {
        ApiStatus::Unavailable
    };

    (status.code(), Json(json!({ "status": status.value() })))
}

pub async fn not_found() -> ApiError {
    DefaultApiError::NotFound.value()
}

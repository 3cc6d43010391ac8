use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::{app::models::api_error::ApiError, AppState};

use super::{errors::FilesApiError, service};

pub async fn get_files(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    match service::get_files(&state).await {
        Ok(files) => Ok(Json(files)),
        Err(e) => {
            tracing::error!(
                token_source = state.token_source.name(),
                "failed to fetch data from API: {}",
                e
            );
            Err(FilesApiError::FetchFailed.value())
        }
    }
}

use reqwest::{header, Client};
use serde_json::Value;

use crate::AppState;

use super::errors::FilesError;

/// Obtains a credential and fetches the caller's file list from upstream.
///
/// Upstream is not contacted when no credential is available.
pub async fn get_files(state: &AppState) -> Result<Value, FilesError> {
    let token = state.token_source.token().await?;

    fetch_files(&state.client, &state.upstream_url, &token).await
}

pub async fn fetch_files(
    client: &Client,
    upstream_url: &str,
    token: &str,
) -> Result<Value, FilesError> {
    let url = files_url(upstream_url);

    let res = client
        .get(&url)
        .bearer_auth(token)
        .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        return Err(FilesError::Status(status));
    }

    let text = res.text().await?;
    let files: Value = serde_json::from_str(&text)?;

    tracing::debug!(
        records = ?files.as_array().map(Vec::len),
        "relaying file list from {}",
        url
    );

    Ok(files)
}

fn files_url(upstream_url: &str) -> String {
    [upstream_url.trim_end_matches('/'), "/files"].concat()
}

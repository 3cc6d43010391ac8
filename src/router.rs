use std::sync::Arc;

use axum::{
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    http::Method,
    routing::get,
    Router,
};
use reqwest::Client;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    app::{self, envy::Envy},
    files,
    tokens::{self, TokenError, TokenSource},
};

pub struct AppState {
    pub token_source: Arc<dyn TokenSource>,
    pub client: Client,
    pub upstream_url: String,
}

impl AppState {
    pub fn new(
        token_source: Arc<dyn TokenSource>,
        client: Client,
        upstream_url: impl Into<String>,
    ) -> Self {
        Self {
            token_source,
            client,
            upstream_url: upstream_url.into(),
        }
    }

    pub fn from_envy(envy: &Envy) -> Result<Self, TokenError> {
        let token_source = tokens::service::from_envy(envy)?;

        Ok(Self::new(token_source, Client::new(), envy.upstream_url()))
    }
}

pub fn build(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::GET]);

    Router::new()
        .route("/", get(app::controller::get_root))
        .route("/ready", get(app::controller::get_ready))
        // files
        .route("/api/files", get(files::controller::get_files))
        .fallback(app::controller::not_found)
        // layers
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(Arc::new(state))
}

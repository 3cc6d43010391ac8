use std::net::{SocketAddr, TcpListener};

use files_proxy::{
    app::{envy::Envy, logging},
    router, server, AppState,
};

#[tokio::main]
async fn main() -> Result<(), axum::BoxError> {
    // tracing
    logging::init();

    // environment
    let envy = Envy::load().map_err(|e| {
        tracing::error!(%e, "invalid configuration");
        e
    })?;
    tracing::debug!(?envy, "configuration loaded");

    // state
    let state = AppState::from_envy(&envy)?;
    tracing::info!(
        token_source = state.token_source.name(),
        "forwarding /api/files to {}",
        state.upstream_url
    );

    // app
    let app = router::build(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], envy.port()));
    let listener = TcpListener::bind(addr)?;

    server::serve(listener, app).await.map_err(|e| {
        tracing::error!(%e, "server error");
        e
    })
}

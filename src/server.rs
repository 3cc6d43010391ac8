use std::{future::Future, net::TcpListener};

use axum::{BoxError, Router};

/// Serves `app` until ctrl-c.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), BoxError> {
    serve_with_shutdown(listener, app, shutdown_signal()).await
}

pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
) -> Result<(), BoxError>
where
    F: Future<Output = ()> + Send + 'static,
{
    listener.set_nonblocking(true)?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::Server::from_tcp(listener)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(signal)
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(%e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }

    tracing::info!("shutdown signal received");
}

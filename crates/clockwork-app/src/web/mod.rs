//! Browser chat: an axum server that hosts the chat page and its JSON API.

mod handlers;
mod page;
mod routes;
mod state;


pub use routes::router;
pub use state::AppState;

use clockwork_common::ClockworkError;
use tokio::net::TcpListener;
use tracing::info;

/// Bind `addr` and serve the chat until Ctrl-C.
pub async fn serve(addr: &str, state: AppState) -> Result<(), ClockworkError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ClockworkError::Server(format!("failed to bind {addr}: {e}")))?;

    info!("clockwork web chat listening on http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("clockwork web chat stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

//! Server startup for the NI engine API.

use std::net::SocketAddr;

use tracing::info;

use super::handlers::create_router;
use super::state::AppState;

/// Binds `host:port` and serves the API until the process exits.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("{}:{}", host, port).parse::<SocketAddr>()?;
    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

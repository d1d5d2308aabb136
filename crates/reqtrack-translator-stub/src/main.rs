// SPDX-License-Identifier: BUSL-1.1
//! Translator stub server — standalone development server.
//!
//! Listens on `0.0.0.0:$TRANSLATOR_STUB_PORT` (default 8001), the port the
//! client expects by default.

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("TRANSLATOR_STUB_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(reqtrack_translator::config::DEFAULT_PORT);

    let app = reqtrack_translator_stub::router();

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("reqtrack-translator-stub listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await
}

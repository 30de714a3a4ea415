//! Entry point: binds the listener, spawns one task per connection plus the
//! advisory decision-timer sweep, and runs until interrupted.

use anyhow::Context;
use pk_server::AppState;
use pk_store::PgStore;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pk_core::init_logging();
    pk_core::arm_ctrlc();

    let addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("LISTEN_PORT").unwrap_or_else(|_| "7878".to_string());
    let bind = format!("{addr}:{port}");

    let store = PgStore::connect().await;
    let state = Arc::new(AppState::new(store));

    tokio::spawn(pk_server::run_timer_sweep(state.clone()));

    let listener = TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    log::info!("listening on {}", bind);

    while !pk_core::shutdown_requested() {
        match listener.accept().await {
            Ok((stream, peer)) => {
                log::debug!("accepted connection from {}", peer);
                let state = state.clone();
                tokio::spawn(pk_server::handle(stream, state));
            }
            Err(e) => {
                log::warn!("accept failed: {}", e);
            }
        }
    }
    log::info!("shutdown requested, no longer accepting connections");
    Ok(())
}

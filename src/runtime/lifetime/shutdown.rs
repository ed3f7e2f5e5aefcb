use tracing::{error, warn};

/// Resolve once Ctrl+C is received
pub async fn listen_for_shutdown() {
    // 等待 Ctrl+C 信号
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    warn!("Shutdown signal received, stopping server...");
}

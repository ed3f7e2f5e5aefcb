//! Server mode
//!
//! Opens the link registry and serves the admin and view pages over HTTP.

use actix_web::{App, HttpServer, middleware::DefaultHeaders, web};
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::constants::ADMIN_PATH;
use crate::api::middleware::SessionTable;
use crate::api::services::configure;
use crate::runtime::lifetime;

/// Run the HTTP server
///
/// This function:
/// 1. Opens the configured storage backend and link registry
/// 2. Configures and starts the HTTP server
/// 3. Listens for Ctrl+C
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    let config = crate::config::get_config();

    let startup = lifetime::startup::open_registry(&config).map_err(|e| {
        tracing::error!("Server startup failed: {}", e);
        e
    })?;

    if config.admin.password == "1234" {
        warn!("Admin password is the built-in default; set admin.password in config.toml");
    }

    let app_state = web::Data::new(startup.app_state(&config));
    let sessions = web::Data::new(SessionTable::new(startup.notification_ttl));
    let workers = config.server.workers.clamp(1, 32);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(sessions.clone())
            .app_data(web::FormConfig::default().limit(64 * 1024))
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .configure(configure)
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .workers(workers);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();

    info!("Starting server at http://{}", bind_address);
    info!("Admin page: http://{}{}", bind_address, ADMIN_PATH);

    // Wait for server or shutdown signal
    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Server stopped");
        }
    }

    Ok(())
}

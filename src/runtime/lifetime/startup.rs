use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::api::services::AppState;
use crate::config::StaticConfig;
use crate::services::LinkRegistry;
use crate::storage::{KvStore, StorageFactory};

pub struct StartupContext {
    pub store: Arc<dyn KvStore>,
    pub registry: LinkRegistry,
    pub notification_ttl: Duration,
}

impl StartupContext {
    /// Shared handler state for the HTTP server
    pub fn app_state(&self, config: &StaticConfig) -> AppState {
        AppState {
            registry: self.registry.clone(),
            admin_password: config.admin.password.clone(),
            public_url: config.server.public_url.clone(),
            notification_ttl: self.notification_ttl,
        }
    }
}

/// 打开键值存储并构建链接注册表
///
/// Shared by server and CLI modes so both see the same persisted collection.
pub fn open_registry(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Opening {} storage backend", config.storage.backend);

    let store =
        StorageFactory::create(&config.storage).context("Failed to create storage backend")?;
    info!("Using storage backend: {}", store.backend_name());

    let registry = LinkRegistry::new(store.clone());
    let notification_ttl = Duration::from_secs(config.admin.notification_secs);

    debug!(
        "Storage ready in {:.2}ms",
        start_time.elapsed().as_secs_f64() * 1000.0
    );

    Ok(StartupContext {
        store,
        registry,
        notification_ttl,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_registry_with_memory_backend() {
        let mut config = StaticConfig::default();
        config.storage.backend = "memory".to_string();
        config.admin.notification_secs = 5;

        let ctx = open_registry(&config).expect("memory backend should open");
        assert_eq!(ctx.store.backend_name(), "memory");
        assert_eq!(ctx.notification_ttl, Duration::from_secs(5));
        assert!(ctx.registry.list().is_empty());

        let state = ctx.app_state(&config);
        assert_eq!(state.admin_password, "1234");
    }

    #[test]
    fn test_open_registry_rejects_unknown_backend() {
        let mut config = StaticConfig::default();
        config.storage.backend = "redis".to_string();
        assert!(open_registry(&config).is_err());
    }
}

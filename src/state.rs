use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::auth::memory::MemoryUserStore;
use crate::auth::repo::{PgUserStore, UserStore};
use crate::config::{AppConfig, StoreKind};
use crate::detect::services::{CannedDetector, Detector};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn UserStore>,
    pub detector: Arc<dyn Detector>,
}

impl AppState {
    /// Builds the store named by the config and waits until it answers a ping.
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let store: Arc<dyn UserStore> = match config.store {
            StoreKind::Postgres => {
                let url = config
                    .database_url
                    .as_deref()
                    .context("DATABASE_URL is required for the postgres store")?;
                let pg = PgUserStore::connect(url, config.db_max_connections).await?;
                pg.migrate().await?;
                Arc::new(pg)
            }
            StoreKind::Memory => {
                info!("using in-memory user store; records are lost on exit");
                Arc::new(MemoryUserStore::new())
            }
        };

        store.ping().await.context("user store is not ready")?;
        info!(store = ?config.store, "user store ready");

        Ok(Self::from_parts(
            Arc::new(config),
            store,
            Arc::new(CannedDetector),
        ))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        store: Arc<dyn UserStore>,
        detector: Arc<dyn Detector>,
    ) -> Self {
        Self {
            config,
            store,
            detector,
        }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        use crate::config::JwtConfig;

        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            store: StoreKind::Memory,
            database_url: None,
            db_max_connections: 1,
            jwt: JwtConfig {
                secret: "test".into(),
                issuer: "test-issuer".into(),
                audience: "test-aud".into(),
                ttl_minutes: 5,
            },
            password: crate::auth::password::cheap_config(),
        });
        Self::from_parts(
            config,
            Arc::new(MemoryUserStore::new()),
            Arc::new(CannedDetector),
        )
    }
}

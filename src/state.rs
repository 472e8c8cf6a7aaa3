use std::sync::Arc;

use axum::extract::FromRef;
use tokio::sync::RwLock;

use crate::catalog::{self, Catalog};
use crate::config::AppConfig;
use crate::notify::{NotificationSink, TracingSink};
use crate::session::store::SessionStore;
use crate::wizard::machine::Wizard;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub sessions: SessionStore,
    pub wizard: Arc<RwLock<Wizard>>,
    pub config: Arc<AppConfig>,
    pub notifier: Arc<dyn NotificationSink>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        Ok(Self::from_parts(
            Arc::new(catalog::seed()),
            config,
            Arc::new(TracingSink),
        ))
    }

    pub fn from_parts(
        catalog: Arc<Catalog>,
        config: Arc<AppConfig>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            catalog,
            sessions: SessionStore::new(),
            wizard: Arc::new(RwLock::new(Wizard::new())),
            config,
            notifier,
        }
    }

    /// Test state: seeded catalog, zero simulated latency.
    #[cfg(test)]
    pub fn fake() -> Self {
        use crate::config::ChainSimConfig;

        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            chain: ChainSimConfig {
                network: "endless-local".into(),
                deploy_ms: 0,
                mint_ms: 0,
            },
        });
        Self::from_parts(Arc::new(catalog::seed()), config, Arc::new(TracingSink))
    }
}

impl FromRef<AppState> for SessionStore {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

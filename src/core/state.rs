use crate::core::config::Config;
use crate::core::logger::targets;
use once_cell::sync::OnceCell;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, warn};

pub struct State {
    pub db: DatabaseConnection,
    pub config: Config,
}

pub type AppState = Arc<State>;

/// Process-wide state; the pool inside lives from startup until shutdown.
pub static APP_STATE: OnceCell<AppState> = OnceCell::new();

impl State {
    /// Installs the state once. A later call keeps the installed pool and
    /// closes the one it was handed.
    pub async fn init(db: DatabaseConnection, config: Config) -> AppState {
        match APP_STATE.try_insert(Arc::new(State { db, config })) {
            Ok(state) => state.clone(),
            Err((current, rejected)) => {
                warn!(target: targets::SYSTEM, "Application state already initialized, dropping extra pool");
                rejected.shutdown().await;
                current.clone()
            }
        }
    }

    pub async fn shutdown(&self) {
        match self.db.close_by_ref().await {
            Ok(()) => info!(target: targets::SYSTEM, "Database pool closed"),
            Err(e) => warn!(target: targets::SYSTEM, error = %e, "Failed to close database pool"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn mock_db() -> DatabaseConnection {
        MockDatabase::new(DatabaseBackend::Postgres).into_connection()
    }

    #[tokio::test]
    async fn second_init_keeps_the_installed_state() {
        let first = State::init(mock_db(), Config::for_tests()).await;
        let second = State::init(mock_db(), Config::for_tests()).await;

        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, APP_STATE.get().expect("state installed")));
    }
}

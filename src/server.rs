//! Reusable server runtime.
//!
//! [`ServerHandle`] owns the full lifecycle: database connection and
//! migrations, service wiring, the REST API, metrics and graceful shutdown.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sea_orm::DatabaseConnection;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
use crate::interfaces::http::{create_api_router, ApiState};
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};
use crate::shared::{AppError, InfraError};

/// The global metrics recorder can only be installed once per process, so a
/// restarted server reuses the first handle.
fn prometheus_handle() -> Result<PrometheusHandle, AppError> {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    if let Some(handle) = HANDLE.get() {
        return Ok(handle.clone());
    }
    let handle = PrometheusBuilder::new().install_recorder().map_err(|e| {
        InfraError::Config(format!("failed to install Prometheus recorder: {}", e))
    })?;
    info!("Prometheus metrics recorder installed");
    Ok(HANDLE.get_or_init(|| handle).clone())
}

/// Handle to a running fitness tracker service.
///
/// ```rust,no_run
/// use fitness_tracker::config::AppConfig;
/// use fitness_tracker::server::ServerHandle;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(AppConfig::default()).await?;
///     handle.install_signal_handler();
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// Repository provider for data access.
    pub repos: Arc<dyn RepositoryProvider>,
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Address the API is bound to (resolves port `0`).
    pub local_addr: SocketAddr,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Connect and migrate the database, wire the services and start
    /// serving the REST API.
    pub async fn start(config: AppConfig) -> Result<Self, AppError> {
        info!("Starting fitness tracker...");

        let metrics = if config.metrics.enabled {
            Some(prometheus_handle()?)
        } else {
            None
        };

        // ── Database ───────────────────────────────────────────
        let db_config = DatabaseConfig {
            url: config.database.connection_url(),
        };
        let db = init_database(&db_config).await?;

        // ── Repositories & Services ────────────────────────────
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let api_router = create_api_router(ApiState::new(repos.clone(), metrics));

        // ── Shutdown coordinator ───────────────────────────────
        let shutdown = ShutdownCoordinator::new(config.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        // ── REST API server ────────────────────────────────────
        let listener = tokio::net::TcpListener::bind(config.api_address()).await?;
        let local_addr = listener.local_addr()?;
        info!(addr = %local_addr, "REST API server listening");
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let api_shutdown = shutdown_signal.clone();
        let api_server = axum::serve(listener, api_router).with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!(error = %e, "REST API server error");
            }
            // make `wait` return if the server stops on its own
            shutdown_signal.trigger();
        });

        Ok(Self {
            repos,
            config,
            local_addr,
            db,
            shutdown,
            api_task,
        })
    }

    /// Get a cloneable shutdown signal.
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Trigger graceful shutdown (non-blocking).
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Block until shutdown is triggered, drain in-flight requests within
    /// the configured timeout, then close the pool.
    pub async fn wait(self) {
        let Self {
            db,
            shutdown,
            api_task,
            ..
        } = self;

        let drained = shutdown
            .shutdown_with_cleanup(|| async move {
                match api_task.await {
                    Ok(()) => info!("REST API server stopped"),
                    Err(e) => error!(error = %e, "REST API server task panicked"),
                }
            })
            .await;
        if !drained {
            warn!("Closing database with requests still in flight");
        }

        if let Err(e) = db.close().await {
            warn!(error = %e, "Error closing database connection");
        } else {
            info!("Database connection closed");
        }

        info!("Fitness tracker shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        info!("Shutting down fitness tracker...");
        self.trigger_shutdown();
        self.wait().await;
    }

    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup (before [`ServerHandle::start`]).
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Repository;

    fn ephemeral_config() -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.server.api_host = "127.0.0.1".into();
        cfg.server.api_port = 0;
        cfg.server.shutdown_timeout = 5;
        cfg.database.url = "sqlite::memory:".into();
        cfg.metrics.enabled = false;
        cfg
    }

    #[tokio::test]
    async fn starts_migrated_and_shuts_down() {
        // DATABASE_URL would override the in-memory url
        if std::env::var(crate::config::DATABASE_URL_ENV).is_ok() {
            return;
        }

        let handle = ServerHandle::start(ephemeral_config()).await.unwrap();
        assert_ne!(handle.local_addr.port(), 0);
        assert!(handle.is_running());
        assert!(handle.repos.users().find_all().await.unwrap().is_empty());

        handle.repos.ping().await.unwrap();
        handle.shutdown().await;
    }
}

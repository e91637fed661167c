use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use sso_api::{build_router, AppState};
use sso_core::repositories::{AppRepository, UserRepository};
use sso_core::services::AuthService;
use sso_infrastructure::{
    create_pool, run_migrations, seed_apps, InMemoryAppRepository, InMemoryUserRepository,
    PgAppRepository, PgUserRepository,
};
use sso_security::PasswordService;
use sso_shared::config::{AppConfig, StorageKind};

struct Storage {
    users: Arc<dyn UserRepository>,
    apps: Arc<dyn AppRepository>,
    /// Set when apps live in memory and can be hot-reloaded
    registry: Option<Arc<InMemoryAppRepository>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize telemetry
    let _log_guard = sso_shared::telemetry::init_telemetry(config.app.log_format);

    info!(env = %config.app.env, "SSO Server starting...");

    let Storage { users, apps, registry } = build_storage(&config).await?;

    let hasher = Arc::new(PasswordService::new(
        config.auth.hash_memory_kib,
        config.auth.hash_iterations,
        config.auth.hash_parallelism,
    )?);
    let auth = AuthService::new(users, apps, hasher)?;

    if let Some(registry) = registry {
        spawn_registry_reloader(registry)?;
    }

    let app = build_router(
        AppState::new(auth),
        Duration::from_secs(config.server.request_timeout_secs),
    );

    // Bind address
    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((host, config.server.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("SSO Server stopped");
    Ok(())
}

async fn build_storage(config: &AppConfig) -> anyhow::Result<Storage> {
    let seeds = seed_apps(&config.apps, &config.auth)?;

    match config.storage.kind {
        StorageKind::Memory => {
            info!("Using in-memory storage with {} application(s)", seeds.len());
            let registry = Arc::new(InMemoryAppRepository::new(seeds));
            Ok(Storage {
                users: Arc::new(InMemoryUserRepository::new()),
                apps: registry.clone(),
                registry: Some(registry),
            })
        }
        StorageKind::Postgres => {
            let url = config
                .storage
                .url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("storage.url is required for postgres"))?;

            info!("Connecting to database...");
            let pool = create_pool(url, config.storage.max_connections).await?;
            run_migrations(&pool).await?;
            info!("Database connection established, migrations applied.");

            let apps = PgAppRepository::new(pool.clone());
            for app in &seeds {
                apps.upsert(app).await?;
            }

            Ok(Storage {
                users: Arc::new(PgUserRepository::new(pool)),
                apps: Arc::new(apps),
                registry: None,
            })
        }
    }
}

/// SIGHUP re-reads configuration and swaps the in-memory app table.
/// A bad configuration keeps the current table.
#[cfg(unix)]
fn spawn_registry_reloader(registry: Arc<InMemoryAppRepository>) -> anyhow::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = signal(SignalKind::hangup())?;
    tokio::spawn(async move {
        while hangup.recv().await.is_some() {
            let reloaded = AppConfig::load()
                .map_err(anyhow::Error::from)
                .and_then(|cfg| Ok(seed_apps(&cfg.apps, &cfg.auth)?));
            match reloaded {
                Ok(apps) => {
                    registry.reload(apps);
                }
                Err(e) => error!("App registry reload failed: {:#}", e),
            }
        }
    });
    Ok(())
}

#[cfg(not(unix))]
fn spawn_registry_reloader(_registry: Arc<InMemoryAppRepository>) -> anyhow::Result<()> {
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

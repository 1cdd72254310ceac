use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use taskboard_api::{build_router, AppState};
use taskboard_core::repositories::Repositories;
use taskboard_core::services::AuthPolicy;
use taskboard_infrastructure::{create_pool, postgres_repositories, run_migrations, MemoryStore};
use taskboard_security::JwtService;
use taskboard_shared::config::{AppConfig, DatabaseBackend, DatabaseSettings, DEV_JWT_SECRET};
use taskboard_shared::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env, config files, environment)
    let config = AppConfig::load().context("failed to load configuration")?;

    // Initialize telemetry; the guard flushes the file sink on exit
    let _log_guard = init_telemetry(&config.log)?;

    info!("{} starting in {} mode...", config.app.name, config.app.env);

    if config.jwt.secret == DEV_JWT_SECRET {
        if config.is_production() {
            anyhow::bail!("jwt.secret must be set in production");
        }
        warn!("Using the development JWT secret");
    }

    let repos = open_store(&config.database).await?;

    let jwt = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry));
    let policy = AuthPolicy {
        admin_emails: config.auth.admin_emails.clone(),
        min_password_length: config.auth.min_password_length,
    };
    let state = AppState::new(repos, jwt, policy);
    let app = build_router(state, &config.cors);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse().context("invalid app.host")?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn open_store(settings: &DatabaseSettings) -> anyhow::Result<Repositories> {
    match settings.backend {
        DatabaseBackend::Memory => {
            warn!("Using the in-memory store; data is lost on restart");
            Ok(Arc::new(MemoryStore::new()).repositories())
        }
        DatabaseBackend::Postgres => {
            info!("Connecting to database...");
            let pool = create_pool(settings).await.context("database connection failed")?;
            if settings.run_migrations {
                run_migrations(&pool).await.context("database migration failed")?;
            }
            Ok(postgres_repositories(pool))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}

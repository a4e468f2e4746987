//! Committee Dashboard API server.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use committee_dashboard::adapters::http::{app_router, ApiState};
use committee_dashboard::adapters::{
    InMemoryMemberRepository, PostgresMemberRepository, StaticReferenceData,
};
use committee_dashboard::application::handlers::SeedMembersHandler;
use committee_dashboard::config::{AppConfig, DatabaseConfig};
use committee_dashboard::ports::MemberRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        "Starting committee dashboard"
    );

    let repository = member_store(config.database.as_ref()).await?;

    if config.features.seed_sample_data {
        SeedMembersHandler::new(repository.clone()).handle().await?;
    }

    let state = ApiState::new(repository, Arc::new(StaticReferenceData::current_period()));
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Pretty output in development; JSON in production or when requested.
/// `RUST_LOG` overrides the configured filter.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json_logs() {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn member_store(
    database: Option<&DatabaseConfig>,
) -> Result<Arc<dyn MemberRepository>, Box<dyn std::error::Error>> {
    let Some(database) = database else {
        tracing::info!("No database configured, using in-memory member store");
        return Ok(Arc::new(InMemoryMemberRepository::new()));
    };

    let pool = PgPoolOptions::new()
        .min_connections(database.min_connections)
        .max_connections(database.max_connections)
        .acquire_timeout(database.acquire_timeout())
        .connect(&database.url)
        .await?;

    if database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    tracing::info!(max_connections = database.max_connections, "Connected to PostgreSQL");
    Ok(Arc::new(PostgresMemberRepository::new(pool)))
}

async fn shutdown_signal() {
    wait_for_signal(tokio::signal::ctrl_c()).await;
}

/// Resolves once `signal` fires. A listener that fails never resolves.
async fn wait_for_signal<F>(signal: F)
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

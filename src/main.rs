use std::net::SocketAddr;
use std::sync::Arc;

use job_board_backend::{
    config::{get_config, init_config, LogFormat},
    database::{
        pool::{create_pool, run_migrations},
        JobBoardStore, MemoryStore, PgStore,
    },
    routes, AppState,
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config();
    init_tracing(config.log_format);

    if config.uses_default_admin_password() {
        warn!("ADMIN_PASSWORD is not set; falling back to the built-in default password");
    }

    let store: Arc<dyn JobBoardStore> = if config.database_url.is_some() {
        let pool = create_pool().await?;
        run_migrations(&pool).await?;
        info!("Connected to Postgres and applied migrations");
        Arc::new(PgStore::new(pool))
    } else {
        warn!("DATABASE_URL is not set; using the in-memory store, data will not persist");
        Arc::new(MemoryStore::new())
    };

    let app_state = AppState::new(store, config.admin_password.clone());
    info!("Serving frontend from: {}", config.static_dir.display());
    let app = routes::app(app_state, config);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use visits_backend::Config;
use visits_backend::router::{VisitsState, visits_router};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        db_host = %cfg.db_host,
        db_user = %cfg.db_user,
        db_name = %cfg.db_name,
        db_port = cfg.db_port,
        database_url_override = cfg.database_url.is_some(),
        connect_attempts = cfg.attempts(),
        retry_delay = ?cfg.retry_delay(),
        loglevel = %cfg.loglevel,
    );

    let addr = cfg.listen_addr.clone();
    let app = visits_router(VisitsState::new(cfg));

    let listener = TcpListener::bind(&addr).await?;
    info!("Backend server running on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}

use crate::config::Config;
use crate::error::VisitsError;
use backon::{ConstantBuilder, Retryable};
use sqlx::{AnyConnection, Connection, Error as SqlxError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::{info, warn};

fn retry_policy(cfg: &Config) -> ConstantBuilder {
    ConstantBuilder::default()
        .with_delay(cfg.retry_delay())
        .with_max_times(cfg.attempts() - 1)
}

/// Open a connection and verify it with a ping.
async fn open(cfg: &Config) -> Result<AnyConnection, SqlxError> {
    let url = cfg.database_url()?;
    let mut conn = AnyConnection::connect(&url).await?;
    conn.ping().await?;
    Ok(conn)
}

/// Establish a verified connection, retrying up to `cfg.attempts()` times with a
/// constant delay in between. Every call starts a fresh sequence.
pub async fn connect(cfg: &Config) -> Result<AnyConnection, VisitsError> {
    sqlx::any::install_default_drivers();

    let max = cfg.attempts();
    let counter = AtomicUsize::new(0);
    let attempt = &counter;

    let result = (|| async move {
        let n = attempt.fetch_add(1, Ordering::Relaxed) + 1;
        let conn = open(cfg).await?;
        info!(attempt = n, "connected to database");
        Ok::<_, SqlxError>(conn)
    })
    .retry(retry_policy(cfg))
    .notify(|err: &SqlxError, dur: Duration| {
        warn!(
            attempt = attempt.load(Ordering::Relaxed),
            max,
            error = %err,
            "database connection failed, retrying in {:?}",
            dur
        );
    })
    .await;

    result.map_err(|source| {
        warn!(attempts = max, error = %source, "giving up on database connection");
        VisitsError::Connection {
            attempts: max,
            source,
        }
    })
}

use std::str::FromStr;
use std::time::Duration;

use pawhaven_kernel::settings::DatabaseSettings;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

use crate::error::DbError;

/// Open a connection pool for the configured SQLite store.
///
/// The file is created on first run when `create_if_missing` is set. Foreign
/// keys are left unenforced: adoption inquiries may reference pets that do
/// not exist.
pub async fn connect(settings: &DatabaseSettings) -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::from_str(&settings.url)
        .map_err(|source| DbError::InvalidUrl {
            url: settings.url.clone(),
            source,
        })?
        .create_if_missing(settings.create_if_missing)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections.max(1))
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
        .map_err(DbError::Connection)?;

    tracing::info!(
        target: "pawhaven-db",
        url = %settings.url,
        max_connections = settings.max_connections,
        "database pool ready"
    );

    Ok(pool)
}

/// Open a private in-memory store.
///
/// Every SQLite connection to `:memory:` sees its own database, so the pool
/// is pinned to one connection that never expires.
pub async fn connect_in_memory() -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(|source| DbError::InvalidUrl {
            url: "sqlite::memory:".to_string(),
            source,
        })?
        .foreign_keys(false);

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(DbError::Connection)
}

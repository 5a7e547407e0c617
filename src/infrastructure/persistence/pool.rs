//! Connection pool construction.

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::Config;

/// Schema migrations embedded from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens a pool for `config.database_url`.
///
/// The database file is created if missing. Every connection waits at most
/// the store timeout on a locked database before reporting busy, and pool
/// acquisition waits at most `DB_CONNECT_TIMEOUT`.
///
/// An in-memory database lives only as long as its connection, so it is
/// served from a single connection that is never recycled.
///
/// # Errors
///
/// Returns an error if the connection string is malformed or the database
/// cannot be opened.
pub async fn connect_pool(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .busy_timeout(config.store_timeout());

    let pool_options = SqlitePoolOptions::new().acquire_timeout(config.connect_timeout());

    let pool_options = if config.database_url.contains(":memory:") {
        tracing::warn!("Using an in-memory database, links are lost on shutdown");
        pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        pool_options.max_connections(config.db_max_connections)
    };

    pool_options.connect_with(options).await
}

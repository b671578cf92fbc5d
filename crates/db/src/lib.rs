//! Data access for the movie catalogue.
//!
//! The store is a single SQLite database opened once at startup. Every
//! repository method issues exactly one statement with positionally bound
//! parameters.
//!
//! # Concurrency
//!
//! The pool is shared by all request handlers without any locking in this
//! crate. Conflicting writes are serialized by SQLite's database lock: every
//! connection carries a busy timeout, so a writer that finds the lock held
//! waits for it instead of failing. Concurrent updates to the same row are
//! last-write-wins. The database file's own journal mode is left untouched.
//!
//! # Keys
//!
//! Ids taken from request paths are bound as the text the client sent.
//! SQLite applies the `INTEGER` affinity of the key columns when comparing,
//! so `"3"` matches row 3 while `"abc"` or an out-of-range number simply
//! matches nothing.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// How long a connection waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Build connect options for `url` with the service's SQLite settings.
///
/// Foreign-key enforcement is switched off: a movie may reference a
/// director id that does not exist. The database file must already exist.
pub fn connect_options(url: &str) -> Result<SqliteConnectOptions, sqlx::Error> {
    Ok(SqliteConnectOptions::from_str(url)?
        .busy_timeout(BUSY_TIMEOUT)
        .foreign_keys(false)
        .create_if_missing(false))
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = connect_options(database_url)?;
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    tracing::debug!(max_connections, "SQLite pool opened");
    Ok(pool)
}

/// Round-trip a trivial query to confirm the store answers.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

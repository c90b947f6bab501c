//! # ladder-adapter-pg
//!
//! PostgreSQL access for Ladder. [`Database`] owns the bounded connection
//! pool; it is created once at startup, handed to whoever needs it, and
//! closed on shutdown. Every operation acquires one pooled connection, runs
//! its statement(s) on it and returns it on every exit path.
//!
//! Writes are single autocommit statements with bind parameters for all
//! values. Identifiers only reach statement text through the projection
//! path, after being resolved against the live catalog.

pub mod error;
pub mod introspect;
pub mod players;
pub mod projection;
pub mod rankings;

pub use error::DbError;

use ladder_core::{ConnectionPoolConfig, UpstreamConfig};
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};
use std::time::Duration;

/// Handle to the connection pool. Cloning is cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

fn pool_options(config: &ConnectionPoolConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
}

impl Database {
    /// Create the pool and open its first connection.
    pub async fn connect(config: &UpstreamConfig) -> Result<Self, DbError> {
        let pool = pool_options(&config.pool)
            .connect(&config.connection_string())
            .await?;
        tracing::info!(
            database = %config.display_target(),
            max_connections = config.pool.max_connections,
            "Connection pool started"
        );
        Ok(Self { pool })
    }

    /// Create the pool without connecting; connections are opened on demand.
    pub fn connect_lazy(config: &UpstreamConfig) -> Result<Self, DbError> {
        let pool = pool_options(&config.pool).connect_lazy(&config.connection_string())?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the pool, waiting up to `grace` for checked-out connections to
    /// come back. Returns `false` when the grace period ran out.
    pub async fn close(&self, grace: Duration) -> bool {
        match tokio::time::timeout(grace, self.pool.close()).await {
            Ok(()) => {
                tracing::info!("Pool closed");
                true
            }
            Err(_) => {
                tracing::warn!(grace_seconds = grace.as_secs(), "Pool did not drain before the grace period ended");
                false
            }
        }
    }

    /// Check that a connection can be acquired and used.
    pub async fn ping(&self) -> Result<(), DbError> {
        let mut conn = self.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }

    pub(crate) async fn acquire(&self) -> Result<PoolConnection<Postgres>, DbError> {
        self.pool.acquire().await.map_err(DbError::from)
    }
}

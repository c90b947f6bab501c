//! Error types for the Postgres adapter.

use ladder_core::ProjectionError;
use thiserror::Error;

/// Errors raised by database operations.
#[derive(Debug, Error)]
pub enum DbError {
    /// No connection could be obtained: pool exhausted or closed, network or
    /// TLS failure.
    #[error("connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// The statement reached the server and failed there, or its result
    /// could not be decoded.
    #[error("query error: {0}")]
    Query(#[source] sqlx::Error),

    /// A projection was refused before any SQL was built.
    #[error(transparent)]
    Rejected(#[from] ProjectionError),
}

impl DbError {
    pub fn is_connection(&self) -> bool {
        matches!(self, DbError::Connection(_))
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => DbError::Connection(err),
            other => DbError::Query(other),
        }
    }
}

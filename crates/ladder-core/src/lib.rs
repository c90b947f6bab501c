//! # ladder-core
//!
//! Types shared by the Ladder crates: configuration, the records of the
//! player/ranking schema, and the identifier allow-listing that guards the
//! dynamic projection query.

pub mod config;
pub mod ident;
pub mod model;
pub mod projection;

pub use config::{ConfigError, ConnectionPoolConfig, LadderConfig, ServerConfig, UpstreamConfig};
pub use model::{FieldError, NewPlayer, NewPlayerFields, Player, Ranking, WinLossPatch};
pub use projection::{ProjectionError, ProjectionRequest, ValidatedProjection};

/// One projected row; values follow the order of the requested columns.
pub type ResultRow = Vec<serde_json::Value>;

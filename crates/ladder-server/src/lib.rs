//! # ladder-server
//!
//! HTTP surface for the ladder database.
//!
//! - Fixed `player_has_r1` and `ranking` tables: list, insert, update, delete, count
//! - Schema introspection and a validated column projection over any table
//! - The bundled front end, served from embedded assets

pub mod api_types;
pub mod assets;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ServerError};
pub use routes::create_router;
pub use server::LadderServer;
pub use state::AppState;

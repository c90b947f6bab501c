//! Route definitions.

use crate::state::AppState;
use crate::{assets, handlers};
use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/check-db-connection", get(handlers::check_db_connection))
        // Fixed tables
        .route("/playertable", get(handlers::player_table))
        .route("/rankingtable", get(handlers::ranking_table))
        .route("/count-playertable", get(handlers::count_players))
        .route("/insertPlayertable", post(handlers::insert_player))
        .route("/update-name-playertable", post(handlers::update_name))
        .route("/update-points-playertable", post(handlers::update_points))
        .route("/update-ranking-playertable", post(handlers::update_ranking))
        .route("/update-statid-playertable", post(handlers::update_stat_id))
        .route("/update-winloss-playertable", post(handlers::update_win_loss))
        .route("/delete-ranking/{id}", delete(handlers::delete_ranking))
        // Projection
        .route("/projection/tables", get(handlers::projection_tables))
        .route("/projection/columns/{table}", get(handlers::projection_columns))
        .route("/projection/data", post(handlers::projection_data))
        .fallback(assets::static_asset)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

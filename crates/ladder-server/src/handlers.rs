//! Request handlers.
//!
//! Table reads and writes never expose database errors: a failed read shows
//! up as an empty table and a failed write as `{"success": false}` with a 500.
//! The projection endpoints report structured errors through [`ApiError`].

use crate::api_types::*;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use ladder_adapter_pg::DbError;
use ladder_core::model::{present_integer, present_text};
use ladder_core::{
    FieldError, NewPlayer, NewPlayerFields, Player, ProjectionRequest, Ranking, WinLossPatch,
};
use serde_json::Value;

// =============================================================================
// Write outcome helpers
// =============================================================================

/// Why a write did not go through.
enum WriteFailure {
    InvalidBody(JsonRejection),
    MissingPlayerId,
    InvalidField(FieldError),
    Database(DbError),
}

impl From<JsonRejection> for WriteFailure {
    fn from(e: JsonRejection) -> Self {
        WriteFailure::InvalidBody(e)
    }
}

impl From<FieldError> for WriteFailure {
    fn from(e: FieldError) -> Self {
        WriteFailure::InvalidField(e)
    }
}

impl From<DbError> for WriteFailure {
    fn from(e: DbError) -> Self {
        WriteFailure::Database(e)
    }
}

fn write_response(
    operation: &'static str,
    outcome: Result<bool, WriteFailure>,
) -> (StatusCode, Json<SuccessResponse>) {
    let success = match outcome {
        Ok(true) => true,
        Ok(false) => {
            tracing::info!(operation, "No rows affected");
            false
        }
        Err(WriteFailure::InvalidBody(e)) => {
            tracing::warn!(operation, error = %e, "Unreadable request body");
            false
        }
        Err(WriteFailure::MissingPlayerId) => {
            tracing::warn!(operation, "Request without a player id");
            false
        }
        Err(WriteFailure::InvalidField(e)) => {
            tracing::warn!(operation, error = %e, "Invalid field value");
            false
        }
        Err(WriteFailure::Database(e)) => {
            tracing::error!(operation, error = %e, "Write failed");
            false
        }
    };

    let status = if success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(SuccessResponse { success }))
}

fn player_id(value: Option<&Value>) -> Result<String, WriteFailure> {
    present_text(value).ok_or(WriteFailure::MissingPlayerId)
}

// =============================================================================
// Connection check and table reads
// =============================================================================

pub async fn check_db_connection(State(state): State<AppState>) -> &'static str {
    match state.database().ping().await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::warn!(error = %e, "Database connection check failed");
            "unable to connect"
        }
    }
}

pub async fn player_table(State(state): State<AppState>) -> Json<DataResponse<Player>> {
    let data = state.database().fetch_players().await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to fetch players");
        Vec::new()
    });
    Json(DataResponse { data })
}

pub async fn ranking_table(State(state): State<AppState>) -> Json<DataResponse<Ranking>> {
    let data = state.database().fetch_rankings().await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to fetch rankings");
        Vec::new()
    });
    Json(DataResponse { data })
}

pub async fn count_players(State(state): State<AppState>) -> (StatusCode, Json<CountResponse>) {
    match state.database().count_players().await {
        Ok(count) => (
            StatusCode::OK,
            Json(CountResponse {
                success: true,
                count,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to count players");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(CountResponse {
                    success: false,
                    count: -1,
                }),
            )
        }
    }
}

// =============================================================================
// Player and ranking writes
// =============================================================================

pub async fn insert_player(
    State(state): State<AppState>,
    body: Result<Json<InsertPlayerRequest>, JsonRejection>,
) -> (StatusCode, Json<SuccessResponse>) {
    let outcome = async {
        let Json(req) = body?;
        let player = NewPlayer::from_fields(NewPlayerFields {
            player_id: req.id.as_ref(),
            points: req.points.as_ref(),
            username: req.name.as_ref(),
            ranking_id: req.rank.as_ref(),
            stat_id: req.stat_id.as_ref(),
            wins: req.wins.as_ref(),
            losses: req.losses.as_ref(),
        })?;
        Ok::<_, WriteFailure>(state.database().insert_player(&player).await?)
    }
    .await;
    write_response("insert_player", outcome)
}

pub async fn update_name(
    State(state): State<AppState>,
    body: Result<Json<UpdateNameRequest>, JsonRejection>,
) -> (StatusCode, Json<SuccessResponse>) {
    let outcome = async {
        let Json(req) = body?;
        let id = player_id(req.player_id.as_ref())?;
        let name = present_text(req.new_name.as_ref());
        Ok::<_, WriteFailure>(state.database().update_username(&id, name.as_deref()).await?)
    }
    .await;
    write_response("update_name", outcome)
}

pub async fn update_points(
    State(state): State<AppState>,
    body: Result<Json<UpdatePointsRequest>, JsonRejection>,
) -> (StatusCode, Json<SuccessResponse>) {
    let outcome = async {
        let Json(req) = body?;
        let id = player_id(req.player_id.as_ref())?;
        let points = present_integer("newPoints", req.new_points.as_ref())?;
        Ok::<_, WriteFailure>(state.database().update_points(&id, points).await?)
    }
    .await;
    write_response("update_points", outcome)
}

pub async fn update_ranking(
    State(state): State<AppState>,
    body: Result<Json<UpdateRankingRequest>, JsonRejection>,
) -> (StatusCode, Json<SuccessResponse>) {
    let outcome = async {
        let Json(req) = body?;
        let id = player_id(req.player_id.as_ref())?;
        let ranking = present_text(req.new_ranking.as_ref());
        Ok::<_, WriteFailure>(state.database().update_ranking(&id, ranking.as_deref()).await?)
    }
    .await;
    write_response("update_ranking", outcome)
}

pub async fn update_stat_id(
    State(state): State<AppState>,
    body: Result<Json<UpdateStatRequest>, JsonRejection>,
) -> (StatusCode, Json<SuccessResponse>) {
    let outcome = async {
        let Json(req) = body?;
        let id = player_id(req.player_id.as_ref())?;
        let stat = present_text(req.new_stat.as_ref());
        Ok::<_, WriteFailure>(state.database().update_stat_id(&id, stat.as_deref()).await?)
    }
    .await;
    write_response("update_stat_id", outcome)
}

pub async fn update_win_loss(
    State(state): State<AppState>,
    body: Result<Json<UpdateWinLossRequest>, JsonRejection>,
) -> (StatusCode, Json<SuccessResponse>) {
    let outcome = async {
        let Json(req) = body?;
        let id = player_id(req.player_id.as_ref())?;
        let patch = WinLossPatch::from_fields(req.wins.as_ref(), req.losses.as_ref())?;
        Ok::<_, WriteFailure>(state.database().update_win_loss(&id, patch).await?)
    }
    .await;
    write_response("update_win_loss", outcome)
}

pub async fn delete_ranking(
    State(state): State<AppState>,
    Path(ranking_id): Path<String>,
) -> (StatusCode, Json<SuccessResponse>) {
    let outcome = state
        .database()
        .delete_ranking(&ranking_id)
        .await
        .map_err(WriteFailure::from);
    write_response("delete_ranking", outcome)
}

// =============================================================================
// Projection
// =============================================================================

pub async fn projection_tables(
    State(state): State<AppState>,
) -> Result<Json<TablesResponse>, ApiError> {
    let tables = state.database().list_tables().await?;
    Ok(Json(TablesResponse { tables }))
}

pub async fn projection_columns(
    State(state): State<AppState>,
    Path(table): Path<String>,
) -> Result<Json<ColumnsResponse>, ApiError> {
    let columns = state.database().list_columns(&table).await?;
    Ok(Json(ColumnsResponse { columns }))
}

pub async fn projection_data(
    State(state): State<AppState>,
    body: Result<Json<ProjectionRequest>, JsonRejection>,
) -> Result<Json<ProjectionDataResponse>, ApiError> {
    let Json(request) = body?;
    let data = state.database().project(&request).await?;
    Ok(Json(ProjectionDataResponse { data }))
}

//! API request and response types.
//!
//! Field names follow what the bundled front end sends. Form fields that may
//! arrive blank are kept as raw JSON values and interpreted by
//! `ladder_core::model`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Table Listing Types
// =============================================================================

/// Rows of a fixed table.
#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: Vec<T>,
}

/// Outcome of a write.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Outcome of the player count.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    pub success: bool,
    pub count: i64,
}

// =============================================================================
// Player Write Types
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct InsertPlayerRequest {
    pub id: Option<Value>,
    pub points: Option<Value>,
    pub name: Option<Value>,
    pub rank: Option<Value>,
    #[serde(rename = "statID")]
    pub stat_id: Option<Value>,
    pub wins: Option<Value>,
    pub losses: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNameRequest {
    #[serde(rename = "playerID")]
    pub player_id: Option<Value>,
    #[serde(rename = "newName")]
    pub new_name: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePointsRequest {
    #[serde(rename = "playerID")]
    pub player_id: Option<Value>,
    #[serde(rename = "newPoints")]
    pub new_points: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRankingRequest {
    #[serde(rename = "playerID")]
    pub player_id: Option<Value>,
    #[serde(rename = "newRanking")]
    pub new_ranking: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatRequest {
    #[serde(rename = "playerID")]
    pub player_id: Option<Value>,
    #[serde(rename = "newStat")]
    pub new_stat: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateWinLossRequest {
    #[serde(rename = "playerID")]
    pub player_id: Option<Value>,
    pub wins: Option<Value>,
    pub losses: Option<Value>,
}

// =============================================================================
// Projection Types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct TablesResponse {
    pub tables: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ColumnsResponse {
    pub columns: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectionDataResponse {
    pub data: Vec<Vec<Value>>,
}

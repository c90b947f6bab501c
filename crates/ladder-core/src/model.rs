//! Records of the fixed player/ranking schema and the payloads that write them.
//!
//! Form fields arrive as loosely typed JSON. A field counts as *present* only
//! when it is defined, non-null and not an empty string; absent fields fall
//! back to defaults on insert and are left out of partial updates.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A row of `player_has_r1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: String,
    pub points: Option<i32>,
    pub username: Option<String>,
    pub ranking_id: String,
    pub stat_id: String,
    pub wins: Option<i32>,
    pub losses: Option<i32>,
}

/// A row of `ranking`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    pub ranking_id: String,
    pub tier: Option<String>,
    pub min_points: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field '{field}' is not an integer: {value}")]
    NotAnInteger { field: &'static str, value: String },
}

/// Present text value of a form field.
pub fn present_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Present integer value of a form field. Numeric strings are accepted.
pub fn present_integer(field: &'static str, value: Option<&Value>) -> Result<Option<i32>, FieldError> {
    let not_an_integer = |v: &Value| FieldError::NotAnInteger {
        field,
        value: v.to_string(),
    };

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(v @ Value::String(s)) => s.trim().parse().map(Some).map_err(|_| not_an_integer(v)),
        Some(v @ Value::Number(n)) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| not_an_integer(v)),
        Some(v) => Err(not_an_integer(v)),
    }
}

/// Values for a new `player_has_r1` row.
///
/// Missing text fields bind as NULL and are left for the table constraints to
/// judge; missing counters default to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub player_id: Option<String>,
    pub points: i32,
    pub username: Option<String>,
    pub ranking_id: Option<String>,
    pub stat_id: Option<String>,
    pub wins: i32,
    pub losses: i32,
}

/// Raw insert form, one loosely typed JSON value per field.
#[derive(Debug, Clone, Default)]
pub struct NewPlayerFields<'a> {
    pub player_id: Option<&'a Value>,
    pub points: Option<&'a Value>,
    pub username: Option<&'a Value>,
    pub ranking_id: Option<&'a Value>,
    pub stat_id: Option<&'a Value>,
    pub wins: Option<&'a Value>,
    pub losses: Option<&'a Value>,
}

impl NewPlayer {
    pub fn from_fields(fields: NewPlayerFields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            player_id: present_text(fields.player_id),
            points: present_integer("points", fields.points)?.unwrap_or(0),
            username: present_text(fields.username),
            ranking_id: present_text(fields.ranking_id),
            stat_id: present_text(fields.stat_id),
            wins: present_integer("wins", fields.wins)?.unwrap_or(0),
            losses: present_integer("losses", fields.losses)?.unwrap_or(0),
        })
    }
}

/// Partial update of a player's win/loss record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WinLossPatch {
    pub wins: Option<i32>,
    pub losses: Option<i32>,
}

impl WinLossPatch {
    pub fn from_fields(wins: Option<&Value>, losses: Option<&Value>) -> Result<Self, FieldError> {
        Ok(Self {
            wins: present_integer("wins", wins)?,
            losses: present_integer("losses", losses)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.wins.is_none() && self.losses.is_none()
    }

    /// `SET` assignments for the present fields, numbered from `$1`, with
    /// their values in bind order.
    pub fn assignments(&self) -> (Vec<String>, Vec<i32>) {
        let mut clauses = Vec::new();
        let mut binds = Vec::new();
        for (column, value) in [("wins", self.wins), ("losses", self.losses)] {
            if let Some(v) = value {
                binds.push(v);
                clauses.push(format!("{} = ${}", column, binds.len()));
            }
        }
        (clauses, binds)
    }
}

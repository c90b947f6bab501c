//! Column projection over a runtime-chosen table.
//!
//! A [`ProjectionRequest`] carries client-supplied names. It only becomes a
//! [`ValidatedProjection`] after every name has been resolved against a
//! catalog snapshot, and only a validated projection can produce SQL.

use crate::ident::{self, quote_ident};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Postgres caps function arguments at 100, and each projected column is one
/// argument of `jsonb_build_array`.
pub const MAX_PROJECTED_COLUMNS: usize = 100;

/// Reasons a projection is refused before any query runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("at least one column must be selected")]
    EmptyProjection,

    #[error("{requested} columns requested, at most {max} can be projected")]
    TooManyColumns { requested: usize, max: usize },

    #[error("unknown table '{0}'")]
    UnknownTable(String),

    #[error("unknown column '{column}' in table '{table}'")]
    UnknownColumn { table: String, column: String },
}

/// A table plus the columns to read from it, as supplied by a client.
///
/// Deserializes from `{"table": ..., "attributes": [...]}` (`columns` is
/// accepted too) and goes through [`ProjectionRequest::new`], so a decoded
/// request is never empty or oversized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionRequest {
    table: String,
    columns: Vec<String>,
}

impl<'de> Deserialize<'de> for ProjectionRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Fields {
            table: String,
            #[serde(alias = "columns")]
            attributes: Vec<String>,
        }

        let fields = Fields::deserialize(deserializer)?;
        Self::new(fields.table, fields.attributes).map_err(serde::de::Error::custom)
    }
}

impl ProjectionRequest {
    /// Build a request. The column list must be non-empty; duplicates are
    /// kept and show up twice in every row.
    pub fn new(table: impl Into<String>, columns: Vec<String>) -> Result<Self, ProjectionError> {
        if columns.is_empty() {
            return Err(ProjectionError::EmptyProjection);
        }
        if columns.len() > MAX_PROJECTED_COLUMNS {
            return Err(ProjectionError::TooManyColumns {
                requested: columns.len(),
                max: MAX_PROJECTED_COLUMNS,
            });
        }
        Ok(Self {
            table: table.into(),
            columns,
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Resolve the requested table against the catalog's table list.
    pub fn resolve_table<'a, S: AsRef<str>>(
        &self,
        catalog_tables: &'a [S],
    ) -> Result<&'a str, ProjectionError> {
        ident::resolve(&self.table, catalog_tables)
            .ok_or_else(|| ProjectionError::UnknownTable(self.table.clone()))
    }

    /// Resolve every requested column against the resolved table's columns.
    ///
    /// `table` must be the catalog spelling returned by [`resolve_table`].
    ///
    /// [`resolve_table`]: ProjectionRequest::resolve_table
    pub fn validate<S: AsRef<str>>(
        &self,
        table: &str,
        catalog_columns: &[S],
    ) -> Result<ValidatedProjection, ProjectionError> {
        let columns = self
            .columns
            .iter()
            .map(|requested| {
                ident::resolve(requested, catalog_columns)
                    .map(str::to_string)
                    .ok_or_else(|| ProjectionError::UnknownColumn {
                        table: table.to_string(),
                        column: requested.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ValidatedProjection {
            table: table.to_string(),
            columns,
        })
    }
}

/// A projection whose identifiers all come from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedProjection {
    table: String,
    columns: Vec<String>,
}

impl ValidatedProjection {
    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// `SELECT` returning one JSON array per row, ordered like the request.
    pub fn to_sql(&self) -> String {
        let list = self
            .columns
            .iter()
            .map(|c| quote_ident(c))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "SELECT jsonb_build_array({}) AS row FROM {}",
            list,
            quote_ident(&self.table)
        )
    }
}

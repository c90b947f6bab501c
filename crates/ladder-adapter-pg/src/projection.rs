//! Projection of client-chosen columns from a client-chosen table.

use crate::introspect::{column_names, table_names};
use crate::{Database, DbError};
use ladder_core::{ProjectionRequest, ResultRow};
use serde_json::Value;
use sqlx::Row;

impl Database {
    /// Read the requested columns of every row of the requested table.
    ///
    /// Table and column names are resolved against a catalog snapshot taken
    /// on the same connection right before the query; anything the catalog
    /// does not list is rejected and no projection query is sent. Rows come
    /// back in whatever order the server produces them.
    pub async fn project(&self, request: &ProjectionRequest) -> Result<Vec<ResultRow>, DbError> {
        let mut conn = self.acquire().await?;

        let tables = table_names(&mut conn).await?;
        let table = request.resolve_table(&tables).inspect_err(|e| {
            tracing::warn!(error = %e, "Projection rejected");
        })?;
        let columns = column_names(&mut conn, table).await?;
        let validated = request.validate(table, &columns).inspect_err(|e| {
            tracing::warn!(error = %e, "Projection rejected");
        })?;

        let sql = validated.to_sql();
        tracing::debug!(table = validated.table(), columns = ?validated.columns(), "Projecting");

        let records = sqlx::query(&sql).fetch_all(&mut *conn).await?;
        let mut rows = Vec::with_capacity(records.len());
        for record in records {
            rows.push(into_row(record.try_get::<Value, _>("row")?)?);
        }
        Ok(rows)
    }
}

fn into_row(value: Value) -> Result<ResultRow, DbError> {
    match value {
        Value::Array(values) => Ok(values),
        other => Err(DbError::Query(sqlx::Error::Decode(
            format!("projection row is not a JSON array: {other}").into(),
        ))),
    }
}

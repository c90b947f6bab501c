//! Live catalog lookups.
//!
//! Nothing here is cached: each call asks `information_schema` again, so the
//! answer always reflects the schema as it is now.

use crate::{Database, DbError};
use ladder_core::ident::fold_case;
use sqlx::PgConnection;

const TABLES_SQL: &str = r#"
    select table_name::text
    from information_schema.tables
    where table_schema = current_schema()
      and table_type = 'BASE TABLE'
"#;

// The exact spelling wins over the folded one when both tables exist.
const COLUMNS_SQL: &str = r#"
    select c.column_name::text
    from information_schema.columns c
    where c.table_schema = current_schema()
      and c.table_name = (
        select t.table_name
        from information_schema.tables t
        where t.table_schema = current_schema()
          and t.table_type = 'BASE TABLE'
          and t.table_name in ($1, $2)
        order by t.table_name = $1 desc
        limit 1
      )
    order by c.ordinal_position
"#;

/// Base tables of the connection's current schema, in catalog order.
pub(crate) async fn table_names(conn: &mut PgConnection) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(TABLES_SQL)
        .fetch_all(conn)
        .await
}

/// Columns of `table` in ordinal order; empty when no such table exists.
pub(crate) async fn column_names(
    conn: &mut PgConnection,
    table: &str,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(COLUMNS_SQL)
        .bind(table)
        .bind(fold_case(table))
        .fetch_all(conn)
        .await
}

impl Database {
    /// List the tables of the connected schema.
    pub async fn list_tables(&self) -> Result<Vec<String>, DbError> {
        let mut conn = self.acquire().await?;
        let tables = table_names(&mut conn).await?;
        tracing::debug!(count = tables.len(), "Listed tables");
        Ok(tables)
    }

    /// List the columns of `table`.
    ///
    /// The name is matched exactly first, then case-folded the way Postgres
    /// stores unquoted identifiers. An unknown table yields an empty list,
    /// not an error.
    pub async fn list_columns(&self, table: &str) -> Result<Vec<String>, DbError> {
        let mut conn = self.acquire().await?;
        let columns = column_names(&mut conn, table).await?;
        if columns.is_empty() {
            tracing::debug!(table, "No columns found; table unknown or empty");
        }
        Ok(columns)
    }
}

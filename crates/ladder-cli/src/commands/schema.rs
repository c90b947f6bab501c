//! Schema inspection commands.
//!
//! `ladder tables` - list base tables.
//! `ladder columns <TABLE>` - list the columns of one table.

use ladder_adapter_pg::Database;
use ladder_core::UpstreamConfig;
use std::time::Duration;

pub async fn tables(upstream: &UpstreamConfig) -> anyhow::Result<()> {
    let database = Database::connect(upstream).await?;
    let tables = database.list_tables().await;
    database.close(Duration::from_secs(1)).await;

    for table in tables? {
        println!("{table}");
    }
    Ok(())
}

pub async fn columns(upstream: &UpstreamConfig, table: &str) -> anyhow::Result<()> {
    let database = Database::connect(upstream).await?;
    let columns = database.list_columns(table).await;
    database.close(Duration::from_secs(1)).await;

    let columns = columns?;
    if columns.is_empty() {
        anyhow::bail!("no table named '{table}'");
    }
    for column in columns {
        println!("{column}");
    }
    Ok(())
}

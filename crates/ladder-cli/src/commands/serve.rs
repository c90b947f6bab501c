//! `ladder serve` - start the web server.

use ladder_adapter_pg::Database;
use ladder_core::LadderConfig;
use ladder_server::LadderServer;

/// Start the server and run until a shutdown signal arrives.
///
/// A database that is down at startup does not stop the server: the pool is
/// created lazily instead and `/check-db-connection` reports the outage until
/// the database comes back.
pub async fn serve(config: LadderConfig) -> anyhow::Result<()> {
    let database = match Database::connect(&config.upstream).await {
        Ok(database) => database,
        Err(e) => {
            tracing::error!(
                database = %config.upstream.display_target(),
                error = %e,
                "Initial database connection failed, continuing with a lazy pool"
            );
            Database::connect_lazy(&config.upstream)?
        }
    };

    LadderServer::new(config.server, database).run().await?;
    Ok(())
}

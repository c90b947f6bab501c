use clap::{Parser, Subcommand};
use ladder_core::LadderConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "ladder", version, about = "Ladder player rankings")]
struct Cli {
    /// Configuration file. A missing file means defaults.
    #[arg(long, global = true, env = "LADDER_CONFIG", default_value = "ladder.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the web server
    Serve {
        /// Listen address, overrides `server.bind`
        #[arg(long)]
        bind: Option<String>,
    },

    /// List the tables in the current schema
    Tables,

    /// List the columns of a table in declaration order
    Columns {
        /// Table name, matched exactly or case-insensitively
        table: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = LadderConfig::load_or_default(&cli.config)?;

    match cli.cmd {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            commands::serve::serve(config).await?
        }
        Command::Tables => commands::schema::tables(&config.upstream).await?,
        Command::Columns { table } => commands::schema::columns(&config.upstream, &table).await?,
    }

    Ok(())
}

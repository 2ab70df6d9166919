//! cinepulse - browse and search the media catalog from a terminal

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "cinepulse=debug"
    } else {
        "cinepulse=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let sources = cli::commands::Sources {
        config: cli.config,
        data_dir: cli.data_dir,
    };

    match cli.command {
        Commands::Chat { user } => {
            cli::commands::chat(&sources, user).await?;
        }
        Commands::Show { category, page } => {
            cli::commands::show(&sources, category, page).await?;
        }
        Commands::Search { query } => {
            cli::commands::search(&sources, &query.join(" ")).await?;
        }
        Commands::Catalog => {
            cli::commands::catalog(&sources).await?;
        }
        Commands::Replay { file, parallel } => {
            cli::commands::replay(&sources, &file, parallel).await?;
        }
        Commands::InitConfig { force } => {
            cli::commands::init_config(force)?;
        }
        Commands::Completion { shell } => {
            cli::commands::completion(shell);
        }
    }

    Ok(())
}

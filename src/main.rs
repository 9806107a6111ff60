//! Dataset Voyage - Main Entry Point
//!
//! Serves the interactive page by default; subcommands run evaluations in the terminal.

use clap::Parser;
use dataset_voyage::cli::{cmd_datasets, cmd_evaluate, cmd_serve, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dataset_voyage=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Evaluate { dataset, classifier, k, c, max_depth, n_estimators, plot }) => {
            cmd_evaluate(&dataset, &classifier, k, c, max_depth, n_estimators, plot.as_ref())?;
        }
        Some(Commands::Datasets) => {
            cmd_datasets()?;
        }
        Some(Commands::Serve { host, port }) => {
            cmd_serve(host, port).await?;
        }
        None => {
            cmd_serve(None, None).await?;
        }
    }

    Ok(())
}

//! Connector Indexing Status - admin dashboard binary
//!
//! Serves the indexing status dashboard over HTTP.

use std::path::PathBuf;

use clap::Parser;
use cis_server::run;

/// Command line interface for the dashboard server
#[derive(Parser, Debug)]
#[command(name = "cis")]
#[command(about = "Connector indexing status admin dashboard")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Snapshot JSON file (overrides `dashboard.snapshot_path`)
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Listen port (overrides `server.port`)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli.config.as_deref(), cli.snapshot.as_deref(), cli.port).await
}

//! Command-line interface for game_data_server.

use clap::Parser;
use std::path::PathBuf;

/// Game Data Service - JSON catalog of games backed by MySQL
#[derive(Parser, Debug)]
#[command(name = "game_data_server")]
#[command(about = "HTTP JSON service for a MySQL game catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (env vars still override it)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Route prefix, e.g. /game-data (use "" to mount at the root)
    #[arg(long)]
    pub prefix: Option<String>,
}

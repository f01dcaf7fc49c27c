//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sidecar-hub",
    about = "Sidecar Hub - queued collector actions for remote sidecar agents",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database file path
    #[arg(
        long,
        env = "SIDECAR_HUB_DB_PATH",
        default_value = "./data/sidecar-hub.db",
        help = "Path to SQLite database file"
    )]
    pub db_path: String,

    /// Disable colored output
    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server
    Serve {
        #[command(flatten)]
        args: crate::commands::ServeArgs,
    },
    /// Initialize database and run migrations
    Migrate,
}

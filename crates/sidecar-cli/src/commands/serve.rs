//! REST API server command

use crate::error::{CliError, CliResult};
use clap::Args;
use sidecar_server::{AppState, AuthConfig};

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Host and port to bind to
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub addr: String,

    /// API tokens as name:token:perm[,perm...] (multiple allowed)
    #[arg(long = "token", env = "SIDECAR_HUB_TOKENS", value_delimiter = ';')]
    pub tokens: Vec<String>,

    /// Serve from an in-memory store instead of the database
    #[arg(long)]
    pub memory: bool,
}

/// Execute the serve command
pub async fn execute(args: ServeArgs, db_path: &str) -> CliResult<()> {
    let auth = AuthConfig::from_specs(&args.tokens)
        .map_err(|e| CliError::InvalidArgument(e.to_string()))?;
    if auth.is_empty() {
        tracing::warn!("No API tokens configured; every request will be rejected with 401");
    }

    let app_state = if args.memory {
        tracing::info!("Using in-memory action store; state is lost on shutdown");
        AppState::in_memory(auth)
    } else {
        tracing::info!("Database: {}", db_path);
        crate::utils::ensure_parent_dir(db_path)?;
        AppState::from_db_path(db_path, auth).await?
    };

    tracing::info!("Starting REST API server on {}", args.addr);
    sidecar_server::serve_rest(app_state, &args.addr).await?;

    Ok(())
}

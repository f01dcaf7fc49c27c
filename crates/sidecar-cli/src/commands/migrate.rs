//! Database migration command

use crate::error::CliResult;
use crate::utils::{ensure_parent_dir, ColoredOutput};
use sidecar_store::SqlActionStore;

/// Create the database if missing and bring its schema up to date.
pub async fn execute(db_path: &str) -> CliResult<()> {
    tracing::info!("Running migrations against {}", db_path);
    ensure_parent_dir(db_path)?;

    // Opening the store runs pending migrations
    let store = SqlActionStore::new(db_path).await?;
    store.migrate().await?;

    println!("{} database ready at {}", ColoredOutput::success("OK:"), db_path);
    Ok(())
}

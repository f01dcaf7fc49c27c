//! Sidecar Hub Server
//!
//! REST API over the collector action queue.

pub mod app_state;
pub mod audit;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod restapi;

// Re-export key types
pub use app_state::AppState;
pub use audit::{AuditRecorder, TracingAuditRecorder};
pub use error::{ServerError, ServerResult};
pub use middleware::{AuthConfig, Principal};

/// Serve the REST API on the given address until shutdown.
pub async fn serve_rest(app_state: AppState, addr: &str) -> ServerResult<()> {
    restapi::serve(app_state, addr).await
}

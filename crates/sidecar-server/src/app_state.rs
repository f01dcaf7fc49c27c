//! Application state shared across the REST API

use crate::{
    audit::{AuditRecorder, TracingAuditRecorder},
    middleware::AuthConfig,
};
use sidecar_core::{ActionService, ActionStore};
use sidecar_store::{MemoryActionStore, SqlActionStore};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: ActionService,
    pub audit: Arc<dyn AuditRecorder>,
    pub auth: Arc<AuthConfig>,
}

impl AppState {
    /// Create app state backed by the SQLite store at the given path
    pub async fn from_db_path(db_path: &str, auth: AuthConfig) -> anyhow::Result<Self> {
        let store = Arc::new(SqlActionStore::new(db_path).await?);
        Ok(Self::with_store(store, auth))
    }

    /// Create app state over an in-memory store (tests, `--memory` mode)
    pub fn in_memory(auth: AuthConfig) -> Self {
        Self::with_store(Arc::new(MemoryActionStore::new()), auth)
    }

    pub fn with_store(store: Arc<dyn ActionStore>, auth: AuthConfig) -> Self {
        Self {
            service: ActionService::new(store),
            audit: Arc::new(TracingAuditRecorder),
            auth: Arc::new(auth),
        }
    }

    /// Replace the audit recorder (used by tests to capture events)
    pub fn with_audit(mut self, audit: Arc<dyn AuditRecorder>) -> Self {
        self.audit = audit;
        self
    }
}

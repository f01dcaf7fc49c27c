//! Audit event types emitted by the REST layer.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A sidecar's queued action list was set or replaced.
pub const ACTION_UPDATE: &str = "sidecar_action_update";

/// One audit record: who did what to which sidecar, under which request.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub event_type: String,
    pub actor: String,
    pub sidecar_id: String,
    pub request_id: String,
    pub occurred_at: DateTime<Utc>,
}

impl AuditEvent {
    pub fn new(
        event_type: impl Into<String>,
        actor: impl Into<String>,
        sidecar_id: impl Into<String>,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            actor: actor.into(),
            sidecar_id: sidecar_id.into(),
            request_id: request_id.into(),
            occurred_at: Utc::now(),
        }
    }
}

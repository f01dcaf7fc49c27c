//! Audit emission for state-changing operations.
//!
//! The update route records an [`AuditEvent`] after a successful save;
//! validation or permission failures record nothing.

use sidecar_core::audit::AuditEvent;

/// Sink for audit records. Injected through [`crate::AppState`] so tests can
/// capture emitted events.
pub trait AuditRecorder: Send + Sync {
    fn record(&self, event: AuditEvent);
}

/// Default recorder: structured tracing events under the `audit` target.
#[derive(Debug, Default)]
pub struct TracingAuditRecorder;

impl AuditRecorder for TracingAuditRecorder {
    fn record(&self, event: AuditEvent) {
        tracing::info!(
            target: "audit",
            event_type = %event.event_type,
            actor = %event.actor,
            sidecar_id = %event.sidecar_id,
            request_id = %event.request_id,
            occurred_at = %event.occurred_at,
            "audit event"
        );
    }
}

use crate::{error::CoreResult, types::CollectorActions};
use async_trait::async_trait;

/// Persistence for queued collector actions, one document per sidecar id.
///
/// Durability and per-sidecar write serialization are the implementor's
/// concern; callers get last-write-wins semantics.
#[async_trait]
pub trait ActionStore: Send + Sync {
    /// Look up the queued document for a sidecar. With `remove` set, the
    /// document is deleted as part of the read (one-shot delivery to a
    /// polling agent).
    async fn find_by_sidecar(
        &self,
        sidecar_id: &str,
        remove: bool,
    ) -> CoreResult<Option<CollectorActions>>;

    /// Upsert by sidecar id, returning the stored value.
    async fn save(&self, actions: &CollectorActions) -> CoreResult<CollectorActions>;

    /// Drop the queued document for a sidecar, reporting whether one existed.
    async fn delete(&self, sidecar_id: &str) -> CoreResult<bool>;
}

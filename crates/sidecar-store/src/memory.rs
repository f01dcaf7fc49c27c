use async_trait::async_trait;
use sidecar_core::{ActionStore, CollectorActions, CoreResult};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`ActionStore`] for tests and `--memory` mode.
#[derive(Debug, Clone, Default)]
pub struct MemoryActionStore {
    data: Arc<RwLock<HashMap<String, CollectorActions>>>,
}

impl MemoryActionStore {
    pub fn new() -> Self {
        Self { data: Arc::new(RwLock::new(HashMap::new())) }
    }
}

#[async_trait]
impl ActionStore for MemoryActionStore {
    async fn find_by_sidecar(
        &self,
        sidecar_id: &str,
        remove: bool,
    ) -> CoreResult<Option<CollectorActions>> {
        let mut data = self.data.write().await;
        if remove {
            Ok(data.remove(sidecar_id))
        } else {
            Ok(data.get(sidecar_id).cloned())
        }
    }

    async fn save(&self, actions: &CollectorActions) -> CoreResult<CollectorActions> {
        let mut data = self.data.write().await;
        data.insert(actions.sidecar_id.clone(), actions.clone());
        Ok(actions.clone())
    }

    async fn delete(&self, sidecar_id: &str) -> CoreResult<bool> {
        let mut data = self.data.write().await;
        Ok(data.remove(sidecar_id).is_some())
    }
}

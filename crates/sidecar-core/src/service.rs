//! The collaborator the REST resource delegates to.

use crate::{
    error::CoreResult,
    store::ActionStore,
    types::{CollectorAction, CollectorActions},
};
use std::sync::Arc;

/// Thin service over an [`ActionStore`]: lookups pass through, writes go
/// through [`ActionService::from_request`] so that an update replaces the
/// queued list while keeping the stored document id stable.
#[derive(Clone)]
pub struct ActionService {
    store: Arc<dyn ActionStore>,
}

impl ActionService {
    pub fn new(store: Arc<dyn ActionStore>) -> Self {
        Self { store }
    }

    pub async fn find_action_by_sidecar(
        &self,
        sidecar_id: &str,
        remove: bool,
    ) -> CoreResult<Option<CollectorActions>> {
        self.store.find_by_sidecar(sidecar_id, remove).await
    }

    /// Build the document for a submitted action list. An existing document
    /// keeps its id; the action list is replaced wholesale, never merged.
    pub async fn from_request(
        &self,
        sidecar_id: &str,
        actions: Vec<CollectorAction>,
    ) -> CoreResult<CollectorActions> {
        match self.store.find_by_sidecar(sidecar_id, false).await? {
            Some(existing) => {
                Ok(CollectorActions::replace_actions(existing.id, sidecar_id, actions))
            }
            None => Ok(CollectorActions::create(sidecar_id, actions)),
        }
    }

    pub async fn save_action(&self, actions: &CollectorActions) -> CoreResult<CollectorActions> {
        self.store.save(actions).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubStore {
        data: Mutex<HashMap<String, CollectorActions>>,
    }

    #[async_trait]
    impl ActionStore for StubStore {
        async fn find_by_sidecar(
            &self,
            sidecar_id: &str,
            remove: bool,
        ) -> CoreResult<Option<CollectorActions>> {
            let mut data = self.data.lock().unwrap();
            if remove {
                Ok(data.remove(sidecar_id))
            } else {
                Ok(data.get(sidecar_id).cloned())
            }
        }

        async fn save(&self, actions: &CollectorActions) -> CoreResult<CollectorActions> {
            let mut data = self.data.lock().unwrap();
            data.insert(actions.sidecar_id.clone(), actions.clone());
            Ok(actions.clone())
        }

        async fn delete(&self, sidecar_id: &str) -> CoreResult<bool> {
            let mut data = self.data.lock().unwrap();
            Ok(data.remove(sidecar_id).is_some())
        }
    }

    fn service() -> ActionService {
        ActionService::new(Arc::new(StubStore::default()))
    }

    #[tokio::test]
    async fn from_request_mints_id_for_new_sidecar() {
        let service = service();
        let doc = service
            .from_request("sc-1", vec![CollectorAction::new("collector-1")])
            .await
            .unwrap();
        assert_eq!(doc.sidecar_id, "sc-1");
        assert!(!doc.id.is_empty());
    }

    #[tokio::test]
    async fn from_request_keeps_existing_document_id() {
        let service = service();
        let first = service
            .from_request("sc-1", vec![CollectorAction::new("collector-1")])
            .await
            .unwrap();
        service.save_action(&first).await.unwrap();

        let second = service
            .from_request("sc-1", vec![CollectorAction::new("collector-2")])
            .await
            .unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(second.actions.len(), 1);
        assert_eq!(second.actions[0].collector_id, "collector-2");
    }

    #[tokio::test]
    async fn save_then_find_round_trips() {
        let service = service();
        let doc = service
            .from_request(
                "sc-1",
                vec![CollectorAction::new("a"), CollectorAction::new("b")],
            )
            .await
            .unwrap();
        service.save_action(&doc).await.unwrap();

        let found = service.find_action_by_sidecar("sc-1", false).await.unwrap().unwrap();
        assert_eq!(found, doc);
        // Non-removing reads leave the document in place
        assert!(service.find_action_by_sidecar("sc-1", false).await.unwrap().is_some());
    }
}

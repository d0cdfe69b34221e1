use tokio::sync::RwLock;

use matreq_core::domain::request::{MaterialRequest, RequestId};
use matreq_core::errors::StoreError;
use matreq_core::store::RequestStore;

#[derive(Default)]
pub struct InMemoryRequestStore {
    requests: RwLock<Vec<MaterialRequest>>,
}

impl InMemoryRequestStore {
    pub async fn find_by_id(&self, id: &RequestId) -> Option<MaterialRequest> {
        let requests = self.requests.read().await;
        requests.iter().find(|r| &r.id == id).cloned()
    }

    pub async fn saved(&self) -> Vec<MaterialRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait::async_trait]
impl RequestStore for InMemoryRequestStore {
    async fn save(&self, request: MaterialRequest) -> Result<(), StoreError> {
        let mut requests = self.requests.write().await;
        requests.push(request);
        Ok(())
    }
}

use async_trait::async_trait;

use crate::domain::request::MaterialRequest;
use crate::errors::StoreError;

/// Save-only view of the persistence layer as the draft consumes it.
/// Implementations live in `matreq-db`.
#[async_trait]
pub trait RequestStore: Send + Sync {
    async fn save(&self, request: MaterialRequest) -> Result<(), StoreError>;
}

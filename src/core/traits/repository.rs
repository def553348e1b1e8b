use async_trait::async_trait;
use uuid::Uuid;

use crate::core::Result;

/// Base repository trait shared by the catalog collections.
///
/// Every collection supports create/read/update plus a name lookup; there is
/// no delete anywhere in the catalog.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// Persist a new entity
    async fn create(&self, entity: &T) -> Result<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>>;

    /// Find the first entity whose name equals `name` exactly
    async fn find_by_name(&self, name: &str) -> Result<Option<T>>;

    /// Replace a stored entity, matched by its ID. Returns `None` when absent.
    async fn update(&self, entity: &T) -> Result<Option<T>>;

    /// List all entities in creation order
    async fn list(&self) -> Result<Vec<T>>;

    /// Verify the backing store is reachable
    async fn ping(&self) -> Result<()>;
}

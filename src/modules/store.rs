//! Catalog store handle.
//!
//! Bundles the three collection repositories behind trait objects so the
//! services receive the store explicitly and tests can swap MySQL for the
//! in-memory implementation.

use std::sync::Arc;

use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::categories::repositories::{
    CategoryRepository, InMemoryCategoryRepository, MySqlCategoryRepository,
};
use crate::modules::items::repositories::{
    InMemoryItemRepository, ItemRepository, MySqlItemRepository,
};
use crate::modules::subcategories::repositories::{
    InMemorySubCategoryRepository, MySqlSubCategoryRepository, SubCategoryRepository,
};

#[derive(Clone)]
pub struct CatalogStore {
    pub categories: Arc<dyn CategoryRepository>,
    pub subcategories: Arc<dyn SubCategoryRepository>,
    pub items: Arc<dyn ItemRepository>,
}

impl CatalogStore {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        subcategories: Arc<dyn SubCategoryRepository>,
        items: Arc<dyn ItemRepository>,
    ) -> Self {
        Self {
            categories,
            subcategories,
            items,
        }
    }

    /// Store backed by a MySQL pool
    pub fn mysql(pool: MySqlPool) -> Self {
        Self::new(
            Arc::new(MySqlCategoryRepository::new(pool.clone())),
            Arc::new(MySqlSubCategoryRepository::new(pool.clone())),
            Arc::new(MySqlItemRepository::new(pool)),
        )
    }

    /// Empty store held in process memory
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryCategoryRepository::new()),
            Arc::new(InMemorySubCategoryRepository::new()),
            Arc::new(InMemoryItemRepository::new()),
        )
    }

    /// Check that every collection is reachable
    pub async fn ping(&self) -> Result<()> {
        self.categories.ping().await?;
        self.subcategories.ping().await?;
        self.items.ping().await?;
        Ok(())
    }
}

use std::sync::Arc;

use crate::core::error::AppError;
use crate::core::lookup::{require_id, resolve_by_id_or_name};
use crate::core::traits::Repository;
use crate::modules::categories::models::{
    Category, CategoryDetail, CreateCategoryRequest, UpdateCategoryRequest,
};
use crate::modules::categories::repositories::CategoryRepository;
use crate::modules::items::repositories::ItemRepository;
use crate::modules::store::CatalogStore;
use crate::modules::subcategories::repositories::SubCategoryRepository;

const NOT_FOUND: &str = "Category not found";

/// Service for category business logic
pub struct CategoryService {
    category_repo: Arc<dyn CategoryRepository>,
    subcategory_repo: Arc<dyn SubCategoryRepository>,
    item_repo: Arc<dyn ItemRepository>,
}

impl CategoryService {
    pub fn new(store: &CatalogStore) -> Self {
        Self {
            category_repo: store.categories.clone(),
            subcategory_repo: store.subcategories.clone(),
            item_repo: store.items.clone(),
        }
    }

    /// Create a category, defaulting absent tax fields
    pub async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> Result<Category, AppError> {
        let category = Category::new(request)?;
        let created = self.category_repo.create(&category).await?;

        tracing::info!(category_id = %created.id, name = %created.name, "Category created");
        Ok(created)
    }

    /// List all categories
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.category_repo.list().await
    }

    /// Get a category by ID or name, optionally expanded with its subcategories and items
    pub async fn get_category(
        &self,
        id_or_name: &str,
        expand: bool,
    ) -> Result<CategoryDetail, AppError> {
        let category: Category =
            resolve_by_id_or_name(self.category_repo.as_ref(), id_or_name, NOT_FOUND).await?;

        if !expand {
            return Ok(CategoryDetail::plain(category));
        }

        let subcategories = self.subcategory_repo.list_by_category(category.id).await?;
        let items = self.item_repo.list_by_category(category.id).await?;

        Ok(CategoryDetail::expanded(category, subcategories, items))
    }

    /// Apply a partial update to a category
    pub async fn update_category(
        &self,
        id: &str,
        request: UpdateCategoryRequest,
    ) -> Result<Category, AppError> {
        let id = require_id(id, NOT_FOUND)?;
        let mut category = self
            .category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

        category.apply_update(request)?;

        let updated = self
            .category_repo
            .update(&category)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

        tracing::info!(category_id = %updated.id, "Category updated");
        Ok(updated)
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::error::AppError;
use crate::core::lookup::{require_id, resolve_by_id_or_name};
use crate::core::traits::Repository;
use crate::modules::categories::repositories::CategoryRepository;
use crate::modules::items::repositories::ItemRepository;
use crate::modules::store::CatalogStore;
use crate::modules::subcategories::models::{
    CreateSubCategoryRequest, SubCategory, SubCategoryDetail, SubCategoryView,
    UpdateSubCategoryRequest,
};
use crate::modules::subcategories::repositories::SubCategoryRepository;
use crate::modules::taxes::services::TaxResolver;

const NOT_FOUND: &str = "Sub-category not found";
const PARENT_NOT_FOUND: &str = "Parent category not found";

/// Service for subcategory business logic
pub struct SubCategoryService {
    subcategory_repo: Arc<dyn SubCategoryRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    item_repo: Arc<dyn ItemRepository>,
    tax_resolver: TaxResolver,
}

impl SubCategoryService {
    pub fn new(store: &CatalogStore) -> Self {
        Self {
            subcategory_repo: store.subcategories.clone(),
            category_repo: store.categories.clone(),
            item_repo: store.items.clone(),
            tax_resolver: TaxResolver::new(),
        }
    }

    /// Create a subcategory under a category.
    ///
    /// Absent tax fields are copied from the parent category.
    pub async fn create_subcategory(
        &self,
        category_id: &str,
        request: CreateSubCategoryRequest,
    ) -> Result<SubCategory, AppError> {
        let category_id = require_id(category_id, PARENT_NOT_FOUND)?;
        let category = self
            .category_repo
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| AppError::not_found(PARENT_NOT_FOUND))?;

        let tax = self
            .tax_resolver
            .resolve(request.tax_overrides(), None, category.tax_settings());

        let subcategory = SubCategory::new(category.id, request, tax)?;
        let created = self.subcategory_repo.create(&subcategory).await?;

        tracing::info!(
            subcategory_id = %created.id,
            category_id = %category.id,
            name = %created.name,
            "SubCategory created"
        );
        Ok(created)
    }

    /// List all subcategories with their category name attached
    pub async fn list_subcategories(&self) -> Result<Vec<SubCategoryView>, AppError> {
        let category_names: HashMap<_, _> = self
            .category_repo
            .list()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let subcategories = self.subcategory_repo.list().await?;

        Ok(subcategories
            .into_iter()
            .map(|subcategory| SubCategoryView {
                category_name: category_names.get(&subcategory.category).cloned(),
                subcategory,
            })
            .collect())
    }

    /// List subcategories of one category
    pub async fn list_by_category(&self, category_id: &str) -> Result<Vec<SubCategory>, AppError> {
        let category_id = require_id(category_id, "Category not found")?;
        self.category_repo
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))?;

        self.subcategory_repo.list_by_category(category_id).await
    }

    /// Get a subcategory by ID or name together with its items
    pub async fn get_subcategory(&self, id_or_name: &str) -> Result<SubCategoryDetail, AppError> {
        let subcategory: SubCategory =
            resolve_by_id_or_name(self.subcategory_repo.as_ref(), id_or_name, NOT_FOUND).await?;

        let items = self.item_repo.list_by_subcategory(subcategory.id).await?;

        Ok(SubCategoryDetail { subcategory, items })
    }

    /// Apply a partial update to a subcategory
    pub async fn update_subcategory(
        &self,
        id: &str,
        request: UpdateSubCategoryRequest,
    ) -> Result<SubCategory, AppError> {
        let id = require_id(id, NOT_FOUND)?;
        let mut subcategory = self
            .subcategory_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

        subcategory.apply_update(request)?;

        let updated = self
            .subcategory_repo
            .update(&subcategory)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

        tracing::info!(subcategory_id = %updated.id, "SubCategory updated");
        Ok(updated)
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::AppError;
use crate::core::lookup::{require_id, resolve_by_id_or_name};
use crate::core::traits::Repository;
use crate::modules::categories::repositories::CategoryRepository;
use crate::modules::items::models::{CreateItemRequest, Item, ItemView, UpdateItemRequest};
use crate::modules::items::repositories::ItemRepository;
use crate::modules::items::services::TotalCalculator;
use crate::modules::store::CatalogStore;
use crate::modules::subcategories::repositories::SubCategoryRepository;
use crate::modules::taxes::services::TaxResolver;

const NOT_FOUND: &str = "Item not found";
const CATEGORY_NOT_FOUND: &str = "Category not found";
const SUBCATEGORY_NOT_FOUND: &str = "SubCategory not found";

/// Service for item business logic
pub struct ItemService {
    item_repo: Arc<dyn ItemRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    subcategory_repo: Arc<dyn SubCategoryRepository>,
    tax_resolver: TaxResolver,
    total_calculator: TotalCalculator,
}

impl ItemService {
    pub fn new(store: &CatalogStore) -> Self {
        Self {
            item_repo: store.items.clone(),
            category_repo: store.categories.clone(),
            subcategory_repo: store.subcategories.clone(),
            tax_resolver: TaxResolver::new(),
            total_calculator: TotalCalculator::new(),
        }
    }

    /// Create an item under a category and optionally one of its subcategories.
    ///
    /// Tax fields fall back to the subcategory, then the category. The total
    /// is computed from `baseAmount` and `discount`.
    pub async fn create_item(
        &self,
        category_id: &str,
        sub_category_id: Option<&str>,
        request: CreateItemRequest,
    ) -> Result<Item, AppError> {
        let category_id = require_id(category_id, CATEGORY_NOT_FOUND)?;
        let category = self
            .category_repo
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| AppError::not_found(CATEGORY_NOT_FOUND))?;

        let subcategory = match sub_category_id {
            Some(token) => {
                let id = require_id(token, SUBCATEGORY_NOT_FOUND)?;
                let subcategory = self
                    .subcategory_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::not_found(SUBCATEGORY_NOT_FOUND))?;

                if subcategory.category != category.id {
                    return Err(AppError::validation(
                        "SubCategory does not belong to the given category",
                    ));
                }
                Some(subcategory)
            }
            None => None,
        };

        let tax = self.tax_resolver.resolve(
            request.tax_overrides(),
            subcategory.as_ref().map(|s| s.tax_overrides()),
            category.tax_settings(),
        );
        let amounts = self
            .total_calculator
            .for_create(request.base_amount, request.discount)?;

        let item = Item::new(
            category.id,
            subcategory.as_ref().map(|s| s.id),
            request,
            tax,
            amounts,
        )?;
        let created = self.item_repo.create(&item).await?;

        tracing::info!(
            item_id = %created.id,
            category_id = %category.id,
            total_amount = %created.total_amount,
            "Item created"
        );
        Ok(created)
    }

    /// List all items with parent names attached
    pub async fn list_items(&self) -> Result<Vec<ItemView>, AppError> {
        let items = self.item_repo.list().await?;
        self.with_parent_names(items).await
    }

    /// Items of one category, including those under its subcategories
    pub async fn list_by_category(&self, category_id: &str) -> Result<Vec<ItemView>, AppError> {
        let category_id = require_id(category_id, CATEGORY_NOT_FOUND)?;
        self.category_repo
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| AppError::not_found(CATEGORY_NOT_FOUND))?;

        let items = self.item_repo.list_by_category(category_id).await?;
        self.with_parent_names(items).await
    }

    /// Items placed under one subcategory
    pub async fn list_by_subcategory(
        &self,
        sub_category_id: &str,
    ) -> Result<Vec<ItemView>, AppError> {
        let sub_category_id = require_id(sub_category_id, SUBCATEGORY_NOT_FOUND)?;
        self.subcategory_repo
            .find_by_id(sub_category_id)
            .await?
            .ok_or_else(|| AppError::not_found(SUBCATEGORY_NOT_FOUND))?;

        let items = self.item_repo.list_by_subcategory(sub_category_id).await?;
        self.with_parent_names(items).await
    }

    /// Case-insensitive substring search on item names.
    ///
    /// An absent or blank query returns every item.
    pub async fn search_items(&self, query: Option<&str>) -> Result<Vec<ItemView>, AppError> {
        let items = match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => self.item_repo.search_by_name(q).await?,
            None => self.item_repo.list().await?,
        };
        self.with_parent_names(items).await
    }

    /// Get an item by ID or name
    pub async fn get_item(&self, id_or_name: &str) -> Result<ItemView, AppError> {
        let item: Item =
            resolve_by_id_or_name(self.item_repo.as_ref(), id_or_name, NOT_FOUND).await?;

        let mut views = self.with_parent_names(vec![item]).await?;
        views
            .pop()
            .ok_or_else(|| AppError::internal("Item view could not be built"))
    }

    /// Apply a partial update, recomputing the total when pricing changes
    pub async fn update_item(&self, id: &str, request: UpdateItemRequest) -> Result<Item, AppError> {
        let id = require_id(id, NOT_FOUND)?;
        let mut item = self
            .item_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

        item.apply_update(&request)?;

        if let Some(amounts) =
            self.total_calculator
                .for_update(item.amounts(), request.base_amount, request.discount)?
        {
            item.set_amounts(amounts);
        }

        let updated = self
            .item_repo
            .update(&item)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

        tracing::info!(
            item_id = %updated.id,
            total_amount = %updated.total_amount,
            "Item updated"
        );
        Ok(updated)
    }

    async fn with_parent_names(&self, items: Vec<Item>) -> Result<Vec<ItemView>, AppError> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let category_names: HashMap<Uuid, String> = self
            .category_repo
            .list()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();
        let subcategory_names: HashMap<Uuid, String> = self
            .subcategory_repo
            .list()
            .await?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();

        Ok(items
            .into_iter()
            .map(|item| ItemView {
                category_name: category_names.get(&item.category).cloned(),
                sub_category_name: item
                    .sub_category
                    .and_then(|id| subcategory_names.get(&id).cloned()),
                item,
            })
            .collect())
    }
}

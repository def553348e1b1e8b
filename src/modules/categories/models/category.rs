// Category model with validation
//
// A category is the top-level catalog grouping. It owns the tax policy
// that subcategories and items copy when they are created.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::validation::{now, required_name};
use crate::core::{numeric, Result};
use crate::modules::items::models::Item;
use crate::modules::subcategories::models::SubCategory;
use crate::modules::taxes::models::{TaxSettings, TaxType};

/// Represents a menu category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category ID (UUID)
    pub id: Uuid,

    /// Unique, trimmed display name
    pub name: String,

    /// Image URL
    pub image: String,

    pub description: String,

    /// Whether items in this category are taxed
    pub tax_applicable: bool,

    /// Tax value, interpreted according to `tax_type`
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,

    pub tax_type: TaxType,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a category
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub tax_applicable: Option<bool>,
    #[serde(default, deserialize_with = "numeric::strict_decimal")]
    pub tax: Option<Decimal>,
    pub tax_type: Option<TaxType>,
}

/// Partial update for a category. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub tax_applicable: Option<bool>,
    #[serde(default, deserialize_with = "numeric::strict_decimal")]
    pub tax: Option<Decimal>,
    pub tax_type: Option<TaxType>,
}

impl Category {
    /// Create a new category, applying tax defaults for absent fields
    pub fn new(request: CreateCategoryRequest) -> Result<Self> {
        let name = required_name(request.name.as_deref(), "Category")?;
        let tax = request.tax.unwrap_or(Decimal::ZERO);

        let now = now();

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            image: request.image.unwrap_or_default(),
            description: request.description.unwrap_or_default(),
            tax_applicable: request.tax_applicable.unwrap_or(false),
            tax,
            tax_type: request.tax_type.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Merge a partial update into this category and re-validate
    pub fn apply_update(&mut self, update: UpdateCategoryRequest) -> Result<()> {
        if let Some(name) = update.name {
            self.name = required_name(Some(&name), "Category")?;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(tax_applicable) = update.tax_applicable {
            self.tax_applicable = tax_applicable;
        }
        if let Some(tax) = update.tax {
            self.tax = tax;
        }
        if let Some(tax_type) = update.tax_type {
            self.tax_type = tax_type;
        }

        self.updated_at = now();
        Ok(())
    }

    /// Tax settings offered to children at creation time
    pub fn tax_settings(&self) -> TaxSettings {
        TaxSettings {
            tax_applicable: self.tax_applicable,
            tax: self.tax,
        }
    }
}

/// Category with its subcategories and items, returned by `?expand=true`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetail {
    #[serde(flatten)]
    pub category: Category,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategories: Option<Vec<SubCategory>>,

    /// Items placed directly under the category, without a subcategory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_under_category: Option<Vec<Item>>,

    /// Items grouped by subcategory ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_by_sub_category: Option<BTreeMap<Uuid, Vec<Item>>>,
}

impl CategoryDetail {
    pub fn plain(category: Category) -> Self {
        Self {
            category,
            subcategories: None,
            items_under_category: None,
            items_by_sub_category: None,
        }
    }

    /// Build the expanded view, grouping every item of the category by subcategory
    pub fn expanded(category: Category, subcategories: Vec<SubCategory>, items: Vec<Item>) -> Self {
        let mut items_by_sub_category: BTreeMap<Uuid, Vec<Item>> = subcategories
            .iter()
            .map(|sub| (sub.id, Vec::new()))
            .collect();
        let mut items_under_category = Vec::new();

        for item in items {
            match item.sub_category {
                Some(sub_id) => items_by_sub_category.entry(sub_id).or_default().push(item),
                None => items_under_category.push(item),
            }
        }

        Self {
            category,
            subcategories: Some(subcategories),
            items_under_category: Some(items_under_category),
            items_by_sub_category: Some(items_by_sub_category),
        }
    }
}

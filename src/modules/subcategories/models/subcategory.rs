// SubCategory model
//
// A subcategory groups items under exactly one category. Its tax fields are
// copied from the parent category when omitted at creation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::validation::{now, required_name};
use crate::core::{numeric, Result};
use crate::modules::items::models::Item;
use crate::modules::taxes::models::{TaxOverrides, TaxSettings};

/// Represents a subcategory nested under a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: Uuid,

    /// Trimmed name, unique among siblings of the same category
    pub name: String,

    /// Owning category ID
    pub category: Uuid,

    pub image: String,

    pub description: String,

    #[serde(default)]
    pub tax_applicable: Option<bool>,

    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub tax: Option<Decimal>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a subcategory
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubCategoryRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub tax_applicable: Option<bool>,
    #[serde(default, deserialize_with = "numeric::strict_decimal")]
    pub tax: Option<Decimal>,
}

impl CreateSubCategoryRequest {
    /// Tax values supplied by the caller, if any
    pub fn tax_overrides(&self) -> TaxOverrides {
        TaxOverrides::new(self.tax_applicable, self.tax)
    }
}

/// Partial update for a subcategory.
///
/// The owning category is fixed at creation and cannot be changed here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubCategoryRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub tax_applicable: Option<bool>,
    #[serde(default, deserialize_with = "numeric::strict_decimal")]
    pub tax: Option<Decimal>,
}

impl SubCategory {
    /// Create a subcategory under `category_id` with already-resolved tax settings
    pub fn new(
        category_id: Uuid,
        request: CreateSubCategoryRequest,
        tax: TaxSettings,
    ) -> Result<Self> {
        let name = required_name(request.name.as_deref(), "SubCategory")?;

        let now = now();

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            category: category_id,
            image: request.image.unwrap_or_default(),
            description: request.description.unwrap_or_default(),
            tax_applicable: Some(tax.tax_applicable),
            tax: Some(tax.tax),
            created_at: now,
            updated_at: now,
        })
    }

    /// Merge a partial update into this subcategory and re-validate
    pub fn apply_update(&mut self, update: UpdateSubCategoryRequest) -> Result<()> {
        if let Some(name) = update.name {
            self.name = required_name(Some(&name), "SubCategory")?;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(tax_applicable) = update.tax_applicable {
            self.tax_applicable = Some(tax_applicable);
        }
        if let Some(tax) = update.tax {
            self.tax = Some(tax);
        }

        self.updated_at = now();
        Ok(())
    }

    /// Tax values this subcategory offers to items created under it
    pub fn tax_overrides(&self) -> TaxOverrides {
        TaxOverrides::new(self.tax_applicable, self.tax)
    }
}

/// Subcategory listed together with its parent category's name
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryView {
    #[serde(flatten)]
    pub subcategory: SubCategory,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

/// Subcategory with the items placed under it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryDetail {
    #[serde(flatten)]
    pub subcategory: SubCategory,

    pub items: Vec<Item>,
}

// Item model
//
// An item is a priced catalog entry placed under a category and optionally
// under one of that category's subcategories. `total_amount` is derived
// from `base_amount` and `discount` and is never accepted from clients.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::validation::{now, required_name};
use crate::core::{numeric, Result};
use crate::modules::items::services::Amounts;
use crate::modules::taxes::models::{TaxOverrides, TaxSettings};

/// Represents a catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,

    pub name: String,

    /// Owning category ID
    pub category: Uuid,

    /// Owning subcategory ID; `None` when placed directly under the category
    pub sub_category: Option<Uuid>,

    pub image: String,

    pub description: String,

    pub tax_applicable: bool,

    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub base_amount: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,

    /// Always base_amount - discount
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Request body for creating an item
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub tax_applicable: Option<bool>,
    #[serde(default, deserialize_with = "numeric::strict_decimal")]
    pub tax: Option<Decimal>,
    #[serde(default, deserialize_with = "numeric::lenient_amount")]
    pub base_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "numeric::lenient_amount")]
    pub discount: Option<Decimal>,
}

impl CreateItemRequest {
    /// Tax values supplied by the caller, if any
    pub fn tax_overrides(&self) -> TaxOverrides {
        TaxOverrides::new(self.tax_applicable, self.tax)
    }
}

/// Partial update for an item.
///
/// Parent references are fixed at creation. `totalAmount` is not accepted;
/// it follows `baseAmount` and `discount`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub tax_applicable: Option<bool>,
    #[serde(default, deserialize_with = "numeric::strict_decimal")]
    pub tax: Option<Decimal>,
    #[serde(default, deserialize_with = "numeric::lenient_amount")]
    pub base_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "numeric::lenient_amount")]
    pub discount: Option<Decimal>,
}

impl Item {
    /// Create an item with resolved tax settings and computed pricing
    pub fn new(
        category_id: Uuid,
        sub_category_id: Option<Uuid>,
        request: CreateItemRequest,
        tax: TaxSettings,
        amounts: Amounts,
    ) -> Result<Self> {
        let name = required_name(request.name.as_deref(), "Item")?;

        let now = now();

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            category: category_id,
            sub_category: sub_category_id,
            image: request.image.unwrap_or_default(),
            description: request.description.unwrap_or_default(),
            tax_applicable: tax.tax_applicable,
            tax: tax.tax,
            base_amount: amounts.base_amount,
            discount: amounts.discount,
            total_amount: amounts.total_amount,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merge the descriptive and tax fields of an update and re-validate.
    ///
    /// Pricing is applied separately through [`Item::set_amounts`].
    pub fn apply_update(&mut self, update: &UpdateItemRequest) -> Result<()> {
        if let Some(name) = &update.name {
            self.name = required_name(Some(name), "Item")?;
        }
        if let Some(image) = &update.image {
            self.image = image.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(tax_applicable) = update.tax_applicable {
            self.tax_applicable = tax_applicable;
        }
        if let Some(tax) = update.tax {
            self.tax = tax;
        }

        self.updated_at = now();
        Ok(())
    }

    /// Current pricing fields
    pub fn amounts(&self) -> Amounts {
        Amounts {
            base_amount: self.base_amount,
            discount: self.discount,
            total_amount: self.total_amount,
        }
    }

    /// Replace pricing fields with a freshly computed set
    pub fn set_amounts(&mut self, amounts: Amounts) {
        self.base_amount = amounts.base_amount;
        self.discount = amounts.discount;
        self.total_amount = amounts.total_amount;
    }
}

/// Item together with the names of its parents
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    #[serde(flatten)]
    pub item: Item,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category_name: Option<String>,
}

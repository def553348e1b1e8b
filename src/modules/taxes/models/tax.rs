use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a category's `tax` value is meant to be applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxType {
    /// `tax` is a percentage of the item amount
    Percentage,

    /// `tax` is a fixed amount per item
    Flat,

    #[default]
    Unknown,
}

impl std::fmt::Display for TaxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxType::Percentage => write!(f, "percentage"),
            TaxType::Flat => write!(f, "flat"),
            TaxType::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for TaxType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "percentage" => Ok(TaxType::Percentage),
            "flat" => Ok(TaxType::Flat),
            "unknown" => Ok(TaxType::Unknown),
            _ => Err(format!("Invalid tax type: {}", s)),
        }
    }
}

/// Fully resolved tax fields as stored on a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxSettings {
    pub tax_applicable: bool,
    pub tax: Decimal,
}

/// Tax fields that may or may not be defined.
///
/// Used both for values supplied in a create request and for the defaults a
/// subcategory offers to its items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaxOverrides {
    pub tax_applicable: Option<bool>,
    pub tax: Option<Decimal>,
}

impl TaxOverrides {
    pub fn new(tax_applicable: Option<bool>, tax: Option<Decimal>) -> Self {
        Self {
            tax_applicable,
            tax,
        }
    }
}

impl From<TaxSettings> for TaxOverrides {
    fn from(settings: TaxSettings) -> Self {
        Self {
            tax_applicable: Some(settings.tax_applicable),
            tax: Some(settings.tax),
        }
    }
}

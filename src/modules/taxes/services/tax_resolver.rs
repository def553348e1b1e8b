use crate::modules::taxes::models::{TaxOverrides, TaxSettings};

/// TaxResolver computes the tax fields a new subcategory or item starts with.
///
/// Resolution happens once, at creation. The result is a snapshot: later
/// changes to a parent's tax fields never flow down to existing children.
pub struct TaxResolver;

impl TaxResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve effective tax settings from the parent chain.
    ///
    /// Each field resolves independently: an explicit value wins, then the
    /// subcategory's value when a subcategory is given and defines it, then
    /// the category's value.
    pub fn resolve(
        &self,
        explicit: TaxOverrides,
        subcategory: Option<TaxOverrides>,
        category: TaxSettings,
    ) -> TaxSettings {
        let inherited = subcategory.unwrap_or_default();

        TaxSettings {
            tax_applicable: explicit
                .tax_applicable
                .or(inherited.tax_applicable)
                .unwrap_or(category.tax_applicable),
            tax: explicit
                .tax
                .or(inherited.tax)
                .unwrap_or(category.tax),
        }
    }
}

impl Default for TaxResolver {
    fn default() -> Self {
        Self::new()
    }
}

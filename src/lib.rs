//! Menu Catalog Library
//!
//! Category, subcategory and item management for a restaurant menu, with
//! tax defaults inherited down the hierarchy and derived item totals.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use app::AppServices;
pub use modules::categories;
pub use modules::items;
pub use modules::store::CatalogStore;
pub use modules::subcategories;
pub use modules::taxes;

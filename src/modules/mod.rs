pub mod categories;
pub mod health;
pub mod items;
pub mod store;
pub mod subcategories;
pub mod taxes;

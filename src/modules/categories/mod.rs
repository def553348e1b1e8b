// Categories module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Category, CategoryDetail};
pub use repositories::CategoryRepository;
pub use services::CategoryService;

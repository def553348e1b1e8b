mod category;

pub use category::{Category, CategoryDetail, CreateCategoryRequest, UpdateCategoryRequest};

mod subcategory_repository;

pub use subcategory_repository::{
    InMemorySubCategoryRepository, MySqlSubCategoryRepository, SubCategoryRepository,
};

mod subcategory;

pub use subcategory::{
    CreateSubCategoryRequest, SubCategory, SubCategoryDetail, SubCategoryView,
    UpdateSubCategoryRequest,
};

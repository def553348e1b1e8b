pub mod models;
pub mod services;

pub use models::{TaxOverrides, TaxSettings, TaxType};
pub use services::TaxResolver;

pub mod item_service;
pub mod total_calculator;

pub use item_service::ItemService;
pub use total_calculator::{Amounts, TotalCalculator};

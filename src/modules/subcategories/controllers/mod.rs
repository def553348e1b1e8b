pub mod subcategory_controller;

pub use subcategory_controller::configure;

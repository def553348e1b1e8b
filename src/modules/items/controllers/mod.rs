pub mod item_controller;

pub use item_controller::configure;

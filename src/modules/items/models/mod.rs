mod item;

pub use item::{CreateItemRequest, Item, ItemView, UpdateItemRequest};

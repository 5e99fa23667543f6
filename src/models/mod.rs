mod diner;
mod item;

pub use diner::{next_auto_name, Diner};
pub use item::{is_valid_price, Assignment, DinerId, Item, ItemId};

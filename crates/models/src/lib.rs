//! SeaORM entities for the shop schema plus connection helpers.
//!
//! Table ownership: `order_group.user_id -> user`, `order_detail.order_group_id
//! -> order_group`, `order_detail.item_id -> item`. `category` stands alone.

pub mod errors;
pub mod db;
pub mod record;
pub mod category;
pub mod user;
pub mod item;
pub mod order_group;
pub mod order_detail;

pub use record::{Record, UNSAVED_ID};

#[cfg(test)]
mod tests;

//! Request and response representations, one module per entity.
//!
//! Requests deserialize with every field defaulted so an update overwrites
//! whatever the caller left out. Responses mirror the stored row.

pub mod category;
pub mod item;
pub mod order_detail;
pub mod order_group;
pub mod user;

pub use category::{CategoryApiRequest, CategoryApiResponse};
pub use item::{ItemApiRequest, ItemApiResponse};
pub use order_detail::{OrderDetailApiRequest, OrderDetailApiResponse};
pub use order_group::{OrderGroupApiRequest, OrderGroupApiResponse};
pub use user::{UserApiRequest, UserApiResponse, UserOrderInfoApiResponse};

//! One `XxxApiLogicService` per entity, each generic over its store.

pub mod category_service;
pub mod item_service;
pub mod order_detail_service;
pub mod order_group_service;
pub mod user_service;

pub use category_service::CategoryApiLogicService;
pub use item_service::ItemApiLogicService;
pub use order_detail_service::OrderDetailApiLogicService;
pub use order_group_service::OrderGroupApiLogicService;
pub use user_service::{OrderInfoInterface, UserApiLogicService};

use chrono::{DateTime, FixedOffset, Utc};

/// Server-assigned timestamps.
pub(crate) fn now() -> DateTime<FixedOffset> { Utc::now().fixed_offset() }

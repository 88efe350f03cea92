use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use models::item::ItemStatus;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemApiRequest {
    pub id: Option<i64>,
    pub status: ItemStatus,
    pub name: String,
    pub title: String,
    pub content: String,
    pub price: Decimal,
    pub brand_name: Option<String>,
    pub registered_at: Option<DateTime<FixedOffset>>,
    pub unregistered_at: Option<DateTime<FixedOffset>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemApiResponse {
    pub id: i64,
    pub status: ItemStatus,
    pub name: String,
    pub title: String,
    pub content: String,
    pub price: Decimal,
    pub brand_name: Option<String>,
    pub registered_at: Option<DateTime<FixedOffset>>,
    pub unregistered_at: Option<DateTime<FixedOffset>>,
}

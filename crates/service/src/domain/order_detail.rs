use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderDetailApiRequest {
    pub id: Option<i64>,
    pub status: String,
    pub arrival_date: Option<DateTime<FixedOffset>>,
    pub quantity: i32,
    pub total_price: Decimal,
    pub order_group_id: Option<i64>,
    pub item_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderDetailApiResponse {
    pub id: i64,
    pub status: String,
    pub arrival_date: Option<DateTime<FixedOffset>>,
    pub quantity: i32,
    pub total_price: Decimal,
    pub order_group_id: i64,
    pub item_id: i64,
}

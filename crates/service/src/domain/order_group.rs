use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use models::order_group::OrderType;

use super::ItemApiResponse;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderGroupApiRequest {
    pub id: Option<i64>,
    pub status: String,
    pub order_type: OrderType,
    pub rev_address: String,
    pub rev_name: String,
    pub payment_type: String,
    pub total_price: Decimal,
    pub total_quantity: i32,
    pub order_at: Option<DateTime<FixedOffset>>,
    pub arrival_date: Option<NaiveDate>,
    pub user_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderGroupApiResponse {
    pub id: i64,
    pub status: String,
    pub order_type: OrderType,
    pub rev_address: String,
    pub rev_name: String,
    pub payment_type: String,
    pub total_price: Decimal,
    pub total_quantity: i32,
    pub order_at: Option<DateTime<FixedOffset>>,
    pub arrival_date: Option<NaiveDate>,
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_api_response_list: Option<Vec<ItemApiResponse>>,
}

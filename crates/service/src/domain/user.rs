use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use models::user::UserStatus;

use super::OrderGroupApiResponse;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserApiRequest {
    pub id: Option<i64>,
    pub account: String,
    pub password: String,
    /// Ignored on create; new users always start REGISTERED.
    pub status: UserStatus,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub registered_at: Option<DateTime<FixedOffset>>,
    pub unregistered_at: Option<DateTime<FixedOffset>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserApiResponse {
    pub id: i64,
    pub account: String,
    pub password: String,
    pub status: UserStatus,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub registered_at: Option<DateTime<FixedOffset>>,
    pub unregistered_at: Option<DateTime<FixedOffset>>,
    /// Only filled by the order-info read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_group_api_response_list: Option<Vec<OrderGroupApiResponse>>,
}

/// Body of `GET /api/user/:id/orderInfo`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserOrderInfoApiResponse {
    pub user_api_response: UserApiResponse,
}

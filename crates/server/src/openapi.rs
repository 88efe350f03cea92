//! OpenAPI document served at `/api-docs/openapi.json`.
//!
//! The CRUD handlers are generic, so they are described here through mirror
//! schemas rather than per-handler annotations. Decimals travel as strings and
//! timestamps as RFC 3339 strings.

use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct PaginationDoc {
    pub total_pages: u64,
    pub total_elements: u64,
    pub current_page: u64,
    pub current_elements: u64,
}

/// Every body is one of these. `status` is `OK` or `ERROR`; `error` is one of
/// `NOT_FOUND`, `MISSING_PAYLOAD`, `VALIDATION`, `INTERNAL`.
#[derive(ToSchema)]
pub struct EnvelopeDoc {
    pub status: String,
    pub message: Option<String>,
    pub error: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
    pub pagination: Option<PaginationDoc>,
}

#[derive(Serialize, ToSchema)]
pub struct CategoryDoc {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub category_type: String,
    pub title: String,
}

#[derive(ToSchema)]
pub struct UserDoc {
    pub id: Option<i64>,
    pub account: String,
    pub password: String,
    /// `REGISTERED` or `UNREGISTERED`
    pub status: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub registered_at: Option<String>,
    pub unregistered_at: Option<String>,
}

#[derive(ToSchema)]
pub struct ItemDoc {
    pub id: Option<i64>,
    /// `REGISTERED`, `UNREGISTERED` or `WAITING`
    pub status: String,
    pub name: String,
    pub title: String,
    pub content: String,
    pub price: String,
    pub brand_name: Option<String>,
    pub registered_at: Option<String>,
    pub unregistered_at: Option<String>,
}

#[derive(ToSchema)]
pub struct OrderGroupDoc {
    pub id: Option<i64>,
    pub status: String,
    /// `ALL` or `EACH`
    pub order_type: String,
    pub rev_address: String,
    pub rev_name: String,
    pub payment_type: String,
    pub total_price: String,
    pub total_quantity: i32,
    pub order_at: Option<String>,
    pub arrival_date: Option<String>,
    pub user_id: i64,
    pub item_api_response_list: Option<Vec<ItemDoc>>,
}

#[derive(ToSchema)]
pub struct OrderDetailDoc {
    pub id: Option<i64>,
    pub status: String,
    pub arrival_date: Option<String>,
    pub quantity: i32,
    pub total_price: String,
    pub order_group_id: i64,
    pub item_id: i64,
}

#[derive(ToSchema)]
pub struct UserOrderInfoUserDoc {
    pub id: i64,
    pub account: String,
    pub status: String,
    pub order_group_api_response_list: Vec<OrderGroupDoc>,
}

#[derive(ToSchema)]
pub struct UserOrderInfoDoc {
    pub user_api_response: UserOrderInfoUserDoc,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::order_info,
    ),
    components(
        schemas(
            HealthResponse,
            PaginationDoc,
            EnvelopeDoc,
            CategoryDoc,
            UserDoc,
            ItemDoc,
            OrderGroupDoc,
            OrderDetailDoc,
            UserOrderInfoUserDoc,
            UserOrderInfoDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "user")
    )
)]
pub struct ApiDoc;

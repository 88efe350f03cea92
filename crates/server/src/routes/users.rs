use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use common::network::Header;
use service::domain::UserOrderInfoApiResponse;
use service::services::OrderInfoInterface;

use crate::errors::ApiError;

pub fn order_info_routes(service: Arc<dyn OrderInfoInterface>) -> Router {
    Router::new().route("/:id/orderInfo", get(order_info)).with_state(service)
}

/// A user with its order groups and the items in each.
#[utoipa::path(
    get,
    path = "/api/user/{id}/orderInfo",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "OK envelope with the nested tree, or NOT_FOUND envelope", body = crate::openapi::UserOrderInfoDoc),
        (status = 500, description = "Storage fault", body = crate::openapi::EnvelopeDoc)
    ),
    tag = "user"
)]
#[instrument(skip(service))]
pub async fn order_info(
    State(service): State<Arc<dyn OrderInfoInterface>>,
    Path(id): Path<i64>,
) -> Result<Json<Header<UserOrderInfoApiResponse>>, ApiError> {
    Ok(Json(service.order_info(id).await?))
}

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ApiServices;

pub mod crud;
pub mod users;

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)),
    tag = "health"
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Every entity under `/api/<entity>`, plus health and the API docs.
pub fn build_router(services: ApiServices, cors: CorsLayer) -> Router {
    let user_routes = crud::crud_routes(services.user.clone()).merge(users::order_info_routes(services.user_orders.clone()));

    let api = Router::new()
        .nest("/api/category", crud::crud_routes(services.category.clone()))
        .nest("/api/user", user_routes)
        .nest("/api/item", crud::crud_routes(services.item.clone()))
        .nest("/api/orderGroup", crud::crud_routes(services.order_group.clone()))
        .nest("/api/orderDetail", crud::crud_routes(services.order_detail.clone()));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

//! Generic handlers mounting any `CrudInterface` at a path prefix.
//!
//! | Method | Path  | Operation |
//! |--------|-------|-----------|
//! | POST   | `/`   | create    |
//! | PUT    | `/`   | update    |
//! | GET    | `/`   | search (`?page=&size=`) |
//! | GET    | `/:id`| read      |
//! | DELETE | `/:id`| delete    |
//!
//! Envelope outcomes, including checked errors, are answered with 200.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{de::DeserializeOwned, Serialize};

use common::network::Header;
use common::pagination::PageRequest;
use service::crud::CrudInterface;

use crate::errors::ApiError;

type Service<Req, Res> = Arc<dyn CrudInterface<Req, Res>>;

pub fn crud_routes<Req, Res>(service: Service<Req, Res>) -> Router
where
    Req: DeserializeOwned + Send + 'static,
    Res: Serialize + Send + 'static,
{
    Router::new()
        .route("/", get(search::<Req, Res>).post(create::<Req, Res>).put(update::<Req, Res>))
        .route("/:id", get(read::<Req, Res>).delete(remove::<Req, Res>))
        .with_state(service)
}

async fn create<Req, Res>(
    State(service): State<Service<Req, Res>>,
    Json(request): Json<Header<Req>>,
) -> Result<Json<Header<Res>>, ApiError>
where
    Req: Send + 'static,
    Res: Send + 'static,
{
    Ok(Json(service.create(request).await?))
}

async fn read<Req, Res>(
    State(service): State<Service<Req, Res>>,
    Path(id): Path<i64>,
) -> Result<Json<Header<Res>>, ApiError>
where
    Req: Send + 'static,
    Res: Send + 'static,
{
    Ok(Json(service.read(id).await?))
}

async fn update<Req, Res>(
    State(service): State<Service<Req, Res>>,
    Json(request): Json<Header<Req>>,
) -> Result<Json<Header<Res>>, ApiError>
where
    Req: Send + 'static,
    Res: Send + 'static,
{
    Ok(Json(service.update(request).await?))
}

async fn remove<Req, Res>(
    State(service): State<Service<Req, Res>>,
    Path(id): Path<i64>,
) -> Result<Json<Header<()>>, ApiError>
where
    Req: Send + 'static,
    Res: Send + 'static,
{
    Ok(Json(service.delete(id).await?))
}

async fn search<Req, Res>(
    State(service): State<Service<Req, Res>>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Header<Vec<Res>>>, ApiError>
where
    Req: Send + 'static,
    Res: Send + 'static,
{
    Ok(Json(service.search(page).await?))
}

//! The CRUD contract every entity service implements, and the shared steps
//! behind it.
//!
//! Checked outcomes (not found, missing payload, invalid input) come back as
//! `Ok(Header::error(..))`; `Err(ServiceError)` is reserved for persistence
//! faults.

use async_trait::async_trait;
use tracing::debug;

use common::network::{ErrorKind, Header};
use common::pagination::PageRequest;
use models::errors::ModelError;
use models::Record;

use crate::errors::ServiceError;
use crate::repository::Repository;

pub const ID_REQUIRED_MESSAGE: &str = "id required";
pub const PAGE_OUT_OF_RANGE_MESSAGE: &str = "page out of range";

#[async_trait]
pub trait CrudInterface<Req, Res>: Send + Sync
where
    Req: Send + 'static,
    Res: Send + 'static,
{
    async fn create(&self, request: Header<Req>) -> Result<Header<Res>, ServiceError>;

    async fn read(&self, id: i64) -> Result<Header<Res>, ServiceError>;

    async fn update(&self, request: Header<Req>) -> Result<Header<Res>, ServiceError>;

    async fn delete(&self, id: i64) -> Result<Header<()>, ServiceError>;

    async fn search(&self, page: PageRequest) -> Result<Header<Vec<Res>>, ServiceError>;
}

/// Entity → response representation. Pure; reused across services.
pub trait EntityResponseMapper<M, Res>: Send + Sync {
    fn response(&self, model: &M) -> Res;
}

pub(crate) async fn read_by_id<M, Res, R>(
    repo: &R,
    mapper: &dyn EntityResponseMapper<M, Res>,
    id: i64,
) -> Result<Header<Res>, ServiceError>
where
    M: Record,
    R: Repository<M> + ?Sized,
{
    Ok(match repo.find_by_id(id).await? {
        Some(model) => Header::ok(mapper.response(&model)),
        None => {
            debug!(id, "read miss");
            Header::not_found()
        }
    })
}

pub(crate) async fn delete_by_id<M, R>(repo: &R, id: i64) -> Result<Header<()>, ServiceError>
where
    M: Record,
    R: Repository<M> + ?Sized,
{
    match repo.find_by_id(id).await? {
        Some(model) => {
            repo.delete(model).await?;
            Ok(Header::ok_empty())
        }
        None => Ok(Header::not_found()),
    }
}

/// Load the row an update targets. `Err(envelope)` is the checked outcome to
/// return as-is (no id, or no such row).
pub(crate) async fn find_for_update<M, Res, R>(
    repo: &R,
    id: Option<i64>,
) -> Result<Result<M, Header<Res>>, ServiceError>
where
    M: Record,
    R: Repository<M> + ?Sized,
{
    let Some(id) = id else {
        return Ok(Err(Header::error(ErrorKind::Validation, ID_REQUIRED_MESSAGE)));
    };
    Ok(repo.find_by_id(id).await?.ok_or_else(Header::not_found))
}

pub(crate) async fn search_page<M, Res, R>(
    repo: &R,
    mapper: &dyn EntityResponseMapper<M, Res>,
    page: PageRequest,
) -> Result<Header<Vec<Res>>, ServiceError>
where
    M: Record,
    R: Repository<M> + ?Sized,
{
    let page = repo.find_all(page).await?;
    if page.is_out_of_range() {
        return Ok(Header::error(ErrorKind::Validation, PAGE_OUT_OF_RANGE_MESSAGE));
    }
    let pagination = page.pagination();
    let list = page.content.iter().map(|m| mapper.response(m)).collect();
    Ok(Header::ok_paged(list, pagination))
}

/// Field-level rejection from the model layer, as a checked outcome.
pub(crate) fn rejected<Res>(err: ModelError) -> Header<Res> {
    Header::error(ErrorKind::Validation, err.to_string())
}

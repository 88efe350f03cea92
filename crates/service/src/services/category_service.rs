use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use common::network::Header;
use common::pagination::PageRequest;
use models::{category, UNSAVED_ID};

use crate::crud::{self, CrudInterface, EntityResponseMapper};
use crate::domain::{CategoryApiRequest, CategoryApiResponse};
use crate::errors::ServiceError;
use crate::repository::Repository;

/// Category CRUD over any category store.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use common::network::Header;
/// use service::crud::CrudInterface;
/// use service::domain::CategoryApiRequest;
/// use service::repository::InMemoryRepository;
/// use service::services::CategoryApiLogicService;
///
/// let svc = CategoryApiLogicService::new(Arc::new(InMemoryRepository::new()));
/// let req = CategoryApiRequest { category_type: "COMPUTER".into(), title: "Laptops".into(), ..Default::default() };
/// let created = tokio_test::block_on(svc.create(Header::ok(req))).unwrap().into_data().unwrap();
/// let read = tokio_test::block_on(svc.read(created.id)).unwrap();
/// assert_eq!(read.into_data(), Some(created));
/// ```
pub struct CategoryApiLogicService<R> {
    repo: Arc<R>,
}

impl<R: Repository<category::Model>> CategoryApiLogicService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }
}

impl<R: Repository<category::Model>> EntityResponseMapper<category::Model, CategoryApiResponse>
    for CategoryApiLogicService<R>
{
    fn response(&self, category: &category::Model) -> CategoryApiResponse {
        CategoryApiResponse {
            id: category.id,
            category_type: category.category_type.clone(),
            title: category.title.clone(),
        }
    }
}

#[async_trait]
impl<R: Repository<category::Model>> CrudInterface<CategoryApiRequest, CategoryApiResponse>
    for CategoryApiLogicService<R>
{
    #[instrument(skip(self, request))]
    async fn create(&self, request: Header<CategoryApiRequest>) -> Result<Header<CategoryApiResponse>, ServiceError> {
        let Some(body) = request.into_data() else { return Ok(Header::missing_payload()) };

        let category = category::Model { id: UNSAVED_ID, category_type: body.category_type, title: body.title };
        let saved = self.repo.save(category).await?;
        info!(id = saved.id, category_type = %saved.category_type, "category created");
        Ok(Header::ok(self.response(&saved)))
    }

    #[instrument(skip(self))]
    async fn read(&self, id: i64) -> Result<Header<CategoryApiResponse>, ServiceError> {
        crud::read_by_id::<category::Model, CategoryApiResponse, _>(self.repo.as_ref(), self, id).await
    }

    #[instrument(skip(self, request))]
    async fn update(&self, request: Header<CategoryApiRequest>) -> Result<Header<CategoryApiResponse>, ServiceError> {
        let Some(body) = request.into_data() else { return Ok(Header::missing_payload()) };
        let mut category = match crud::find_for_update::<category::Model, _, _>(self.repo.as_ref(), body.id).await? {
            Ok(found) => found,
            Err(outcome) => return Ok(outcome),
        };

        category.category_type = body.category_type;
        category.title = body.title;

        let saved = self.repo.save(category).await?;
        info!(id = saved.id, "category updated");
        Ok(Header::ok(self.response(&saved)))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<Header<()>, ServiceError> {
        let outcome = crud::delete_by_id::<category::Model, _>(self.repo.as_ref(), id).await?;
        if outcome.is_ok() {
            info!(id, "category deleted");
        }
        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn search(&self, page: PageRequest) -> Result<Header<Vec<CategoryApiResponse>>, ServiceError> {
        crud::search_page::<category::Model, CategoryApiResponse, _>(self.repo.as_ref(), self, page).await
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use common::network::Header;
use common::pagination::PageRequest;
use models::{item, UNSAVED_ID};

use super::now;
use crate::crud::{self, CrudInterface, EntityResponseMapper};
use crate::domain::{ItemApiRequest, ItemApiResponse};
use crate::errors::ServiceError;
use crate::repository::Repository;

pub struct ItemApiLogicService<R> {
    repo: Arc<R>,
}

impl<R: Repository<item::Model>> ItemApiLogicService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }
}

impl<R: Repository<item::Model>> EntityResponseMapper<item::Model, ItemApiResponse> for ItemApiLogicService<R> {
    fn response(&self, item: &item::Model) -> ItemApiResponse {
        ItemApiResponse {
            id: item.id,
            status: item.status,
            name: item.name.clone(),
            title: item.title.clone(),
            content: item.content.clone(),
            price: item.price,
            brand_name: item.brand_name.clone(),
            registered_at: item.registered_at,
            unregistered_at: item.unregistered_at,
        }
    }
}

#[async_trait]
impl<R: Repository<item::Model>> CrudInterface<ItemApiRequest, ItemApiResponse> for ItemApiLogicService<R> {
    #[instrument(skip(self, request))]
    async fn create(&self, request: Header<ItemApiRequest>) -> Result<Header<ItemApiResponse>, ServiceError> {
        let Some(body) = request.into_data() else { return Ok(Header::missing_payload()) };
        if let Err(e) = item::validate_price("price", body.price) {
            return Ok(crud::rejected(e));
        }

        let item = item::Model {
            id: UNSAVED_ID,
            status: body.status,
            name: body.name,
            title: body.title,
            content: body.content,
            price: body.price,
            brand_name: body.brand_name,
            registered_at: Some(now()),
            unregistered_at: None,
        };
        let saved = self.repo.save(item).await?;
        info!(id = saved.id, name = %saved.name, price = %saved.price, "item created");
        Ok(Header::ok(self.response(&saved)))
    }

    #[instrument(skip(self))]
    async fn read(&self, id: i64) -> Result<Header<ItemApiResponse>, ServiceError> {
        crud::read_by_id::<item::Model, ItemApiResponse, _>(self.repo.as_ref(), self, id).await
    }

    #[instrument(skip(self, request))]
    async fn update(&self, request: Header<ItemApiRequest>) -> Result<Header<ItemApiResponse>, ServiceError> {
        let Some(body) = request.into_data() else { return Ok(Header::missing_payload()) };
        let mut item = match crud::find_for_update::<item::Model, _, _>(self.repo.as_ref(), body.id).await? {
            Ok(found) => found,
            Err(outcome) => return Ok(outcome),
        };
        if let Err(e) = item::validate_price("price", body.price) {
            return Ok(crud::rejected(e));
        }

        item.status = body.status;
        item.name = body.name;
        item.title = body.title;
        item.content = body.content;
        item.price = body.price;
        item.brand_name = body.brand_name;
        item.registered_at = body.registered_at;
        item.unregistered_at = body.unregistered_at;

        let saved = self.repo.save(item).await?;
        info!(id = saved.id, "item updated");
        Ok(Header::ok(self.response(&saved)))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<Header<()>, ServiceError> {
        let outcome = crud::delete_by_id::<item::Model, _>(self.repo.as_ref(), id).await?;
        if outcome.is_ok() {
            info!(id, "item deleted");
        }
        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn search(&self, page: PageRequest) -> Result<Header<Vec<ItemApiResponse>>, ServiceError> {
        crud::search_page::<item::Model, ItemApiResponse, _>(self.repo.as_ref(), self, page).await
    }
}

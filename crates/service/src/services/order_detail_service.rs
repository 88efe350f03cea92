use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use common::network::{ErrorKind, Header};
use common::pagination::PageRequest;
use models::{order_detail, UNSAVED_ID};

use crate::crud::{self, CrudInterface, EntityResponseMapper};
use crate::domain::{OrderDetailApiRequest, OrderDetailApiResponse};
use crate::errors::ServiceError;
use crate::repository::Repository;

pub struct OrderDetailApiLogicService<R> {
    repo: Arc<R>,
}

impl<R: Repository<order_detail::Model>> OrderDetailApiLogicService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }
}

impl<R: Repository<order_detail::Model>> EntityResponseMapper<order_detail::Model, OrderDetailApiResponse>
    for OrderDetailApiLogicService<R>
{
    fn response(&self, detail: &order_detail::Model) -> OrderDetailApiResponse {
        OrderDetailApiResponse {
            id: detail.id,
            status: detail.status.clone(),
            arrival_date: detail.arrival_date,
            quantity: detail.quantity,
            total_price: detail.total_price,
            order_group_id: detail.order_group_id,
            item_id: detail.item_id,
        }
    }
}

/// Both parent keys, or the checked outcome naming the first one missing.
fn parent_ids<Res>(body: &OrderDetailApiRequest) -> Result<(i64, i64), Header<Res>> {
    let order_group_id =
        body.order_group_id.ok_or_else(|| Header::error(ErrorKind::Validation, "order_group_id required"))?;
    let item_id = body.item_id.ok_or_else(|| Header::error(ErrorKind::Validation, "item_id required"))?;
    Ok((order_group_id, item_id))
}

#[async_trait]
impl<R: Repository<order_detail::Model>> CrudInterface<OrderDetailApiRequest, OrderDetailApiResponse>
    for OrderDetailApiLogicService<R>
{
    #[instrument(skip(self, request))]
    async fn create(
        &self,
        request: Header<OrderDetailApiRequest>,
    ) -> Result<Header<OrderDetailApiResponse>, ServiceError> {
        let Some(body) = request.into_data() else { return Ok(Header::missing_payload()) };
        let (order_group_id, item_id) = match parent_ids(&body) {
            Ok(ids) => ids,
            Err(outcome) => return Ok(outcome),
        };
        if let Err(e) = order_detail::validate_line(body.quantity, body.total_price) {
            return Ok(crud::rejected(e));
        }

        let detail = order_detail::Model {
            id: UNSAVED_ID,
            status: body.status,
            arrival_date: body.arrival_date,
            quantity: body.quantity,
            total_price: body.total_price,
            order_group_id,
            item_id,
        };
        let saved = self.repo.save(detail).await?;
        info!(id = saved.id, order_group_id, item_id, "order detail created");
        Ok(Header::ok(self.response(&saved)))
    }

    #[instrument(skip(self))]
    async fn read(&self, id: i64) -> Result<Header<OrderDetailApiResponse>, ServiceError> {
        crud::read_by_id::<order_detail::Model, OrderDetailApiResponse, _>(self.repo.as_ref(), self, id).await
    }

    #[instrument(skip(self, request))]
    async fn update(
        &self,
        request: Header<OrderDetailApiRequest>,
    ) -> Result<Header<OrderDetailApiResponse>, ServiceError> {
        let Some(body) = request.into_data() else { return Ok(Header::missing_payload()) };
        let mut detail = match crud::find_for_update::<order_detail::Model, _, _>(self.repo.as_ref(), body.id).await? {
            Ok(found) => found,
            Err(outcome) => return Ok(outcome),
        };
        let (order_group_id, item_id) = match parent_ids(&body) {
            Ok(ids) => ids,
            Err(outcome) => return Ok(outcome),
        };
        if let Err(e) = order_detail::validate_line(body.quantity, body.total_price) {
            return Ok(crud::rejected(e));
        }

        detail.status = body.status;
        detail.arrival_date = body.arrival_date;
        detail.quantity = body.quantity;
        detail.total_price = body.total_price;
        detail.order_group_id = order_group_id;
        detail.item_id = item_id;

        let saved = self.repo.save(detail).await?;
        info!(id = saved.id, "order detail updated");
        Ok(Header::ok(self.response(&saved)))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<Header<()>, ServiceError> {
        let outcome = crud::delete_by_id::<order_detail::Model, _>(self.repo.as_ref(), id).await?;
        if outcome.is_ok() {
            info!(id, "order detail deleted");
        }
        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn search(&self, page: PageRequest) -> Result<Header<Vec<OrderDetailApiResponse>>, ServiceError> {
        crud::search_page::<order_detail::Model, OrderDetailApiResponse, _>(self.repo.as_ref(), self, page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRepository;
    use rust_decimal::Decimal;

    fn service() -> OrderDetailApiLogicService<InMemoryRepository<order_detail::Model>> {
        OrderDetailApiLogicService::new(Arc::new(InMemoryRepository::new()))
    }

    fn request(order_group_id: Option<i64>, item_id: Option<i64>) -> OrderDetailApiRequest {
        OrderDetailApiRequest {
            status: "WAITING".into(),
            quantity: 1,
            total_price: Decimal::new(900_000, 0),
            order_group_id,
            item_id,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_and_read_back() {
        let svc = service();
        let created = svc.create(Header::ok(request(Some(3), Some(4)))).await.unwrap().into_data().unwrap();
        assert_eq!((created.order_group_id, created.item_id), (3, 4));
        assert_eq!(svc.read(created.id).await.unwrap().into_data(), Some(created));
    }

    #[tokio::test]
    async fn parent_keys_are_required() {
        let svc = service();
        let header = svc.create(Header::ok(request(None, Some(4)))).await.unwrap();
        assert_eq!(header.message(), Some("order_group_id required"));
        let header = svc.create(Header::ok(request(Some(3), None))).await.unwrap();
        assert_eq!(header.message(), Some("item_id required"));
        assert_eq!(header.error_kind(), Some(ErrorKind::Validation));
    }

    #[tokio::test]
    async fn update_of_unknown_id_checks_existence_first() {
        let svc = service();
        let mut req = request(None, None);
        req.id = Some(77);
        let header = svc.update(Header::ok(req)).await.unwrap();
        assert_eq!(header.error_kind(), Some(ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn missing_payload_is_reported() {
        let svc = service();
        assert_eq!(svc.create(Header::ok_empty()).await.unwrap().error_kind(), Some(ErrorKind::MissingPayload));
        assert_eq!(svc.update(Header::ok_empty()).await.unwrap().error_kind(), Some(ErrorKind::MissingPayload));
    }
}

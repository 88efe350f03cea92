use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use common::network::{ErrorKind, Header};
use common::pagination::PageRequest;
use models::{order_group, UNSAVED_ID};

use super::now;
use crate::crud::{self, CrudInterface, EntityResponseMapper};
use crate::domain::{OrderGroupApiRequest, OrderGroupApiResponse};
use crate::errors::ServiceError;
use crate::repository::Repository;

const USER_ID_REQUIRED: &str = "user_id required";

pub struct OrderGroupApiLogicService<R> {
    repo: Arc<R>,
}

impl<R: Repository<order_group::Model>> OrderGroupApiLogicService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }
}

/// Item lists are attached by the order-info read, never here.
impl<R: Repository<order_group::Model>> EntityResponseMapper<order_group::Model, OrderGroupApiResponse>
    for OrderGroupApiLogicService<R>
{
    fn response(&self, group: &order_group::Model) -> OrderGroupApiResponse {
        OrderGroupApiResponse {
            id: group.id,
            status: group.status.clone(),
            order_type: group.order_type,
            rev_address: group.rev_address.clone(),
            rev_name: group.rev_name.clone(),
            payment_type: group.payment_type.clone(),
            total_price: group.total_price,
            total_quantity: group.total_quantity,
            order_at: group.order_at,
            arrival_date: group.arrival_date,
            user_id: group.user_id,
            item_api_response_list: None,
        }
    }
}

#[async_trait]
impl<R: Repository<order_group::Model>> CrudInterface<OrderGroupApiRequest, OrderGroupApiResponse>
    for OrderGroupApiLogicService<R>
{
    #[instrument(skip(self, request))]
    async fn create(&self, request: Header<OrderGroupApiRequest>) -> Result<Header<OrderGroupApiResponse>, ServiceError> {
        let Some(body) = request.into_data() else { return Ok(Header::missing_payload()) };
        let Some(user_id) = body.user_id else {
            return Ok(Header::error(ErrorKind::Validation, USER_ID_REQUIRED));
        };
        if let Err(e) = order_group::validate_totals(body.total_price, body.total_quantity) {
            return Ok(crud::rejected(e));
        }

        let group = order_group::Model {
            id: UNSAVED_ID,
            status: body.status,
            order_type: body.order_type,
            rev_address: body.rev_address,
            rev_name: body.rev_name,
            payment_type: body.payment_type,
            total_price: body.total_price,
            total_quantity: body.total_quantity,
            order_at: Some(now()),
            arrival_date: body.arrival_date,
            user_id,
        };
        let saved = self.repo.save(group).await?;
        info!(id = saved.id, user_id, total_price = %saved.total_price, "order group created");
        Ok(Header::ok(self.response(&saved)))
    }

    #[instrument(skip(self))]
    async fn read(&self, id: i64) -> Result<Header<OrderGroupApiResponse>, ServiceError> {
        crud::read_by_id::<order_group::Model, OrderGroupApiResponse, _>(self.repo.as_ref(), self, id).await
    }

    #[instrument(skip(self, request))]
    async fn update(&self, request: Header<OrderGroupApiRequest>) -> Result<Header<OrderGroupApiResponse>, ServiceError> {
        let Some(body) = request.into_data() else { return Ok(Header::missing_payload()) };
        let mut group = match crud::find_for_update::<order_group::Model, _, _>(self.repo.as_ref(), body.id).await? {
            Ok(found) => found,
            Err(outcome) => return Ok(outcome),
        };
        let Some(user_id) = body.user_id else {
            return Ok(Header::error(ErrorKind::Validation, USER_ID_REQUIRED));
        };
        if let Err(e) = order_group::validate_totals(body.total_price, body.total_quantity) {
            return Ok(crud::rejected(e));
        }

        group.status = body.status;
        group.order_type = body.order_type;
        group.rev_address = body.rev_address;
        group.rev_name = body.rev_name;
        group.payment_type = body.payment_type;
        group.total_price = body.total_price;
        group.total_quantity = body.total_quantity;
        group.order_at = body.order_at;
        group.arrival_date = body.arrival_date;
        group.user_id = user_id;

        let saved = self.repo.save(group).await?;
        info!(id = saved.id, "order group updated");
        Ok(Header::ok(self.response(&saved)))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<Header<()>, ServiceError> {
        let outcome = crud::delete_by_id::<order_group::Model, _>(self.repo.as_ref(), id).await?;
        if outcome.is_ok() {
            info!(id, "order group deleted");
        }
        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn search(&self, page: PageRequest) -> Result<Header<Vec<OrderGroupApiResponse>>, ServiceError> {
        crud::search_page::<order_group::Model, OrderGroupApiResponse, _>(self.repo.as_ref(), self, page).await
    }
}

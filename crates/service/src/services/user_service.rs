use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use common::network::Header;
use common::pagination::PageRequest;
use models::user::UserStatus;
use models::{item, order_group, user, UNSAVED_ID};

use super::now;
use crate::crud::{self, CrudInterface, EntityResponseMapper};
use crate::domain::{ItemApiResponse, OrderGroupApiResponse, UserApiRequest, UserApiResponse, UserOrderInfoApiResponse};
use crate::errors::ServiceError;
use crate::repository::{OrderHistoryRepository, Repository};

/// The user → order groups → items read.
#[async_trait]
pub trait OrderInfoInterface: Send + Sync {
    async fn order_info(&self, id: i64) -> Result<Header<UserOrderInfoApiResponse>, ServiceError>;
}

/// User CRUD plus the order-info aggregation.
///
/// Order groups and items are mapped by the injected mappers (normally the
/// order group and item services), so their response shape has one owner.
pub struct UserApiLogicService<R> {
    repo: Arc<R>,
    history: Arc<dyn OrderHistoryRepository>,
    order_group_mapper: Arc<dyn EntityResponseMapper<order_group::Model, OrderGroupApiResponse>>,
    item_mapper: Arc<dyn EntityResponseMapper<item::Model, ItemApiResponse>>,
}

impl<R: Repository<user::Model>> UserApiLogicService<R> {
    pub fn new(
        repo: Arc<R>,
        history: Arc<dyn OrderHistoryRepository>,
        order_group_mapper: Arc<dyn EntityResponseMapper<order_group::Model, OrderGroupApiResponse>>,
        item_mapper: Arc<dyn EntityResponseMapper<item::Model, ItemApiResponse>>,
    ) -> Self {
        Self { repo, history, order_group_mapper, item_mapper }
    }
}

impl<R: Repository<user::Model>> EntityResponseMapper<user::Model, UserApiResponse> for UserApiLogicService<R> {
    fn response(&self, user: &user::Model) -> UserApiResponse {
        UserApiResponse {
            id: user.id,
            account: user.account.clone(),
            password: user.password.clone(),
            status: user.status,
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            registered_at: user.registered_at,
            unregistered_at: user.unregistered_at,
            order_group_api_response_list: None,
        }
    }
}

#[async_trait]
impl<R: Repository<user::Model>> CrudInterface<UserApiRequest, UserApiResponse> for UserApiLogicService<R> {
    #[instrument(skip(self, request))]
    async fn create(&self, request: Header<UserApiRequest>) -> Result<Header<UserApiResponse>, ServiceError> {
        let Some(body) = request.into_data() else { return Ok(Header::missing_payload()) };

        let user = user::Model {
            id: UNSAVED_ID,
            account: body.account,
            password: body.password,
            status: UserStatus::Registered,
            email: body.email,
            phone_number: body.phone_number,
            registered_at: Some(now()),
            unregistered_at: None,
        };
        let saved = self.repo.save(user).await?;
        info!(id = saved.id, account = %saved.account, "user registered");
        Ok(Header::ok(self.response(&saved)))
    }

    #[instrument(skip(self))]
    async fn read(&self, id: i64) -> Result<Header<UserApiResponse>, ServiceError> {
        crud::read_by_id::<user::Model, UserApiResponse, _>(self.repo.as_ref(), self, id).await
    }

    #[instrument(skip(self, request))]
    async fn update(&self, request: Header<UserApiRequest>) -> Result<Header<UserApiResponse>, ServiceError> {
        let Some(body) = request.into_data() else { return Ok(Header::missing_payload()) };
        let mut user = match crud::find_for_update::<user::Model, _, _>(self.repo.as_ref(), body.id).await? {
            Ok(found) => found,
            Err(outcome) => return Ok(outcome),
        };

        user.account = body.account;
        user.password = body.password;
        user.status = body.status;
        user.email = body.email;
        user.phone_number = body.phone_number;
        user.registered_at = body.registered_at;
        user.unregistered_at = body.unregistered_at;

        let saved = self.repo.save(user).await?;
        info!(id = saved.id, status = ?saved.status, "user updated");
        Ok(Header::ok(self.response(&saved)))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<Header<()>, ServiceError> {
        let outcome = crud::delete_by_id::<user::Model, _>(self.repo.as_ref(), id).await?;
        if outcome.is_ok() {
            info!(id, "user deleted");
        }
        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn search(&self, page: PageRequest) -> Result<Header<Vec<UserApiResponse>>, ServiceError> {
        crud::search_page::<user::Model, UserApiResponse, _>(self.repo.as_ref(), self, page).await
    }
}

#[async_trait]
impl<R: Repository<user::Model>> OrderInfoInterface for UserApiLogicService<R> {
    #[instrument(skip(self))]
    async fn order_info(&self, id: i64) -> Result<Header<UserOrderInfoApiResponse>, ServiceError> {
        let Some(history) = self.history.find_order_history(id).await? else {
            debug!(id, "order info for unknown user");
            return Ok(Header::not_found());
        };

        let order_groups = history
            .order_groups
            .iter()
            .map(|entry| {
                let mut group = self.order_group_mapper.response(&entry.order_group);
                group.item_api_response_list =
                    Some(entry.items.iter().map(|item| self.item_mapper.response(item)).collect());
                group
            })
            .collect::<Vec<_>>();

        let mut user_api_response = self.response(&history.user);
        user_api_response.order_group_api_response_list = Some(order_groups);
        Ok(Header::ok(UserOrderInfoApiResponse { user_api_response }))
    }
}

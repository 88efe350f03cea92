use std::sync::Arc;

use sea_orm::DatabaseConnection;

use models::{category, item, order_detail, order_group, user};
use service::crud::CrudInterface;
use service::domain::{
    CategoryApiRequest, CategoryApiResponse, ItemApiRequest, ItemApiResponse, OrderDetailApiRequest,
    OrderDetailApiResponse, OrderGroupApiRequest, OrderGroupApiResponse, UserApiRequest, UserApiResponse,
};
use service::repository::{
    InMemoryOrderHistoryRepository, InMemoryRepository, OrderHistoryRepository, Repository,
    SeaOrmOrderHistoryRepository, SeaOrmRepository,
};
use service::services::{
    CategoryApiLogicService, ItemApiLogicService, OrderDetailApiLogicService, OrderGroupApiLogicService,
    OrderInfoInterface, UserApiLogicService,
};

/// The services behind the HTTP routes, as trait objects.
#[derive(Clone)]
pub struct ApiServices {
    pub category: Arc<dyn CrudInterface<CategoryApiRequest, CategoryApiResponse>>,
    pub user: Arc<dyn CrudInterface<UserApiRequest, UserApiResponse>>,
    pub user_orders: Arc<dyn OrderInfoInterface>,
    pub item: Arc<dyn CrudInterface<ItemApiRequest, ItemApiResponse>>,
    pub order_group: Arc<dyn CrudInterface<OrderGroupApiRequest, OrderGroupApiResponse>>,
    pub order_detail: Arc<dyn CrudInterface<OrderDetailApiRequest, OrderDetailApiResponse>>,
}

impl ApiServices {
    /// PostgreSQL-backed services sharing one connection pool.
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::build(
            Arc::new(SeaOrmRepository::<category::Entity>::new(db.clone())),
            Arc::new(SeaOrmRepository::<user::Entity>::new(db.clone())),
            Arc::new(SeaOrmRepository::<item::Entity>::new(db.clone())),
            Arc::new(SeaOrmRepository::<order_group::Entity>::new(db.clone())),
            Arc::new(SeaOrmRepository::<order_detail::Entity>::new(db.clone())),
            Arc::new(SeaOrmOrderHistoryRepository::new(db)),
        )
    }

    /// Services over empty in-memory stores; nothing is persisted.
    pub fn in_memory() -> Self {
        let users = Arc::new(InMemoryRepository::<user::Model>::new());
        let items = Arc::new(InMemoryRepository::<item::Model>::new());
        let groups = Arc::new(InMemoryRepository::<order_group::Model>::new());
        let details = Arc::new(InMemoryRepository::<order_detail::Model>::new());
        let history =
            InMemoryOrderHistoryRepository::new(users.clone(), groups.clone(), details.clone(), items.clone());

        Self::build(
            Arc::new(InMemoryRepository::<category::Model>::new()),
            users,
            items,
            groups,
            details,
            Arc::new(history),
        )
    }

    fn build<C, U, I, G, D>(
        categories: Arc<C>,
        users: Arc<U>,
        items: Arc<I>,
        groups: Arc<G>,
        details: Arc<D>,
        history: Arc<dyn OrderHistoryRepository>,
    ) -> Self
    where
        C: Repository<category::Model> + 'static,
        U: Repository<user::Model> + 'static,
        I: Repository<item::Model> + 'static,
        G: Repository<order_group::Model> + 'static,
        D: Repository<order_detail::Model> + 'static,
    {
        let item = Arc::new(ItemApiLogicService::new(items));
        let order_group = Arc::new(OrderGroupApiLogicService::new(groups));
        let user = Arc::new(UserApiLogicService::new(users, history, order_group.clone(), item.clone()));

        Self {
            category: Arc::new(CategoryApiLogicService::new(categories)),
            user: user.clone(),
            user_orders: user,
            item,
            order_group,
            order_detail: Arc::new(OrderDetailApiLogicService::new(details)),
        }
    }
}

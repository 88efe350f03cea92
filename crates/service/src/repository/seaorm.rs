use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityName,
    EntityTrait, IntoActiveModel, IsolationLevel, Iterable, ModelTrait, PaginatorTrait, PrimaryKeyToColumn,
    PrimaryKeyTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::debug;

use common::pagination::PageRequest;
use models::{item, order_detail, order_group, user, Record};

use super::{assemble_history, total_pages, OrderHistoryRepository, Page, Repository, UserOrderHistory};
use crate::errors::ServiceError;

fn db_err(e: DbErr) -> ServiceError { ServiceError::Db(e.to_string()) }

fn table_of<E: EntityTrait>() -> String { E::default().table_name().to_string() }

/// `Repository` over one SeaORM entity with a single `i64` primary key.
pub struct SeaOrmRepository<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self { Self { db, _entity: PhantomData } }
}

impl<E> Clone for SeaOrmRepository<E> {
    fn clone(&self) -> Self { Self::new(self.db.clone()) }
}

#[async_trait]
impl<E> Repository<E::Model> for SeaOrmRepository<E>
where
    E: EntityTrait,
    E::Model: Record + IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i64>,
{
    async fn find_by_id(&self, id: i64) -> Result<Option<E::Model>, ServiceError> {
        E::find_by_id(id).one(&self.db).await.map_err(db_err)
    }

    async fn find_all(&self, page: PageRequest) -> Result<Page<E::Model>, ServiceError> {
        let req = page.normalize();
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
        let paginator = query.paginate(&self.db, req.size);
        let totals = paginator.num_items_and_pages().await.map_err(db_err)?;
        // offsets past the last page never reach the database
        let content = if req.page >= totals.number_of_pages {
            Vec::new()
        } else {
            paginator.fetch_page(req.page).await.map_err(db_err)?
        };
        Ok(Page {
            content,
            number: req.page,
            size: req.size,
            total_elements: totals.number_of_items,
            total_pages: total_pages(totals.number_of_items, req.size),
        })
    }

    async fn save(&self, model: E::Model) -> Result<E::Model, ServiceError> {
        // Every column is marked Set so an update rewrites the whole row.
        let mut am = <E::ActiveModel as ActiveModelTrait>::default();
        for col in E::Column::iter() {
            am.set(col, model.get(col));
        }
        if model.is_new() {
            for key in E::PrimaryKey::iter() {
                am.not_set(key.into_column());
            }
            let saved = am.insert(&self.db).await.map_err(db_err)?;
            debug!(table = %table_of::<E>(), id = saved.id(), "row inserted");
            Ok(saved)
        } else {
            am.update(&self.db).await.map_err(db_err)
        }
    }

    async fn delete(&self, model: E::Model) -> Result<(), ServiceError> {
        let res = E::delete_by_id(model.id()).exec(&self.db).await.map_err(db_err)?;
        if res.rows_affected == 0 {
            debug!(table = %table_of::<E>(), id = model.id(), "delete matched no row");
        }
        Ok(())
    }
}

/// Loads the order history inside one read-only REPEATABLE READ transaction,
/// so the user, its groups and their lines come from the same snapshot.
pub struct SeaOrmOrderHistoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrderHistoryRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl OrderHistoryRepository for SeaOrmOrderHistoryRepository {
    async fn find_order_history(&self, user_id: i64) -> Result<Option<UserOrderHistory>, ServiceError> {
        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::RepeatableRead), Some(AccessMode::ReadOnly))
            .await
            .map_err(db_err)?;

        let Some(found) = user::Entity::find_by_id(user_id).one(&txn).await.map_err(db_err)? else {
            txn.commit().await.map_err(db_err)?;
            return Ok(None);
        };

        let groups = found
            .find_related(order_group::Entity)
            .order_by_asc(order_group::Column::Id)
            .all(&txn)
            .await
            .map_err(db_err)?;

        let group_ids: Vec<i64> = groups.iter().map(|g| g.id).collect();
        let lines = if group_ids.is_empty() {
            Vec::new()
        } else {
            order_detail::Entity::find()
                .filter(order_detail::Column::OrderGroupId.is_in(group_ids))
                .order_by_asc(order_detail::Column::Id)
                .find_also_related(item::Entity)
                .all(&txn)
                .await
                .map_err(db_err)?
        };

        txn.commit().await.map_err(db_err)?;
        debug!(user_id, groups = groups.len(), lines = lines.len(), "order history loaded");
        assemble_history(found, groups, lines).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::crud::{CrudInterface, PAGE_OUT_OF_RANGE_MESSAGE};
    use crate::services::CategoryApiLogicService;
    use crate::test_support::{fixtures, get_db, unique};
    use common::network::ErrorKind;
    use models::{category, UNSAVED_ID};

    #[tokio::test]
    async fn category_save_insert_update_delete() {
        let Some(db) = get_db().await else { return };
        let repo: SeaOrmRepository<category::Entity> = SeaOrmRepository::new(db);

        let created = repo.save(fixtures::category(UNSAVED_ID, "TEST", &unique("cat"))).await.unwrap();
        assert!(created.id > 0);

        let mut changed = created.clone();
        changed.category_type = "CLOTHING".into();
        let updated = repo.save(changed.clone()).await.unwrap();
        assert_eq!(updated, changed);
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(changed.clone()));

        repo.delete(changed).await.unwrap();
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_all_pages_in_id_order() {
        let Some(db) = get_db().await else { return };
        let repo: SeaOrmRepository<category::Entity> = SeaOrmRepository::new(db);
        for _ in 0..3 {
            repo.save(fixtures::category(UNSAVED_ID, "PAGE", &unique("p"))).await.unwrap();
        }

        let page = repo.find_all(PageRequest::new(0, 2)).await.unwrap();
        assert_eq!(page.size, 2);
        assert!(page.total_elements >= 3);
        assert_eq!(page.total_pages, page.total_elements.div_ceil(2));
        assert!(page.content.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn find_all_past_last_page_skips_fetch() {
        let Some(db) = get_db().await else { return };
        let repo: SeaOrmRepository<category::Entity> = SeaOrmRepository::new(db);
        repo.save(fixtures::category(UNSAVED_ID, "PAGE", &unique("far"))).await.unwrap();

        for req in [PageRequest::new(u64::MAX / 2, 10), PageRequest::new(1 << 57, 100)] {
            let page = repo.find_all(req).await.unwrap();
            assert!(page.content.is_empty());
            assert!(page.is_out_of_range());
        }
    }

    #[tokio::test]
    async fn search_with_huge_page_index_is_validation() {
        let Some(db) = get_db().await else { return };
        let repo = Arc::new(SeaOrmRepository::<category::Entity>::new(db));
        repo.save(fixtures::category(UNSAVED_ID, "PAGE", &unique("huge"))).await.unwrap();
        let service = CategoryApiLogicService::new(repo);

        let res = service.search(PageRequest::new(u64::MAX / 2, 10)).await.unwrap();
        assert_eq!(res.error_kind(), Some(ErrorKind::Validation));
        assert_eq!(res.message(), Some(PAGE_OUT_OF_RANGE_MESSAGE));
    }

    #[tokio::test]
    async fn order_history_reads_nested_tree() {
        let Some(db) = get_db().await else { return };
        let users: SeaOrmRepository<user::Entity> = SeaOrmRepository::new(db.clone());
        let items: SeaOrmRepository<item::Entity> = SeaOrmRepository::new(db.clone());
        let groups: SeaOrmRepository<order_group::Entity> = SeaOrmRepository::new(db.clone());
        let details: SeaOrmRepository<order_detail::Entity> = SeaOrmRepository::new(db.clone());

        let u = users.save(fixtures::user(UNSAVED_ID, &unique("hist"))).await.unwrap();
        let i1 = items.save(fixtures::item(UNSAVED_ID, "i1")).await.unwrap();
        let i2 = items.save(fixtures::item(UNSAVED_ID, "i2")).await.unwrap();
        let g1 = groups.save(fixtures::order_group(UNSAVED_ID, u.id)).await.unwrap();
        let g2 = groups.save(fixtures::order_group(UNSAVED_ID, u.id)).await.unwrap();
        details.save(fixtures::order_detail(UNSAVED_ID, g1.id, i2.id)).await.unwrap();
        details.save(fixtures::order_detail(UNSAVED_ID, g2.id, i1.id)).await.unwrap();
        details.save(fixtures::order_detail(UNSAVED_ID, g1.id, i1.id)).await.unwrap();

        let repo = SeaOrmOrderHistoryRepository::new(db);
        let history = repo.find_order_history(u.id).await.unwrap().unwrap();
        assert_eq!(history.user.id, u.id);
        let ids: Vec<i64> = history.order_groups.iter().map(|g| g.order_group.id).collect();
        assert_eq!(ids, vec![g1.id, g2.id]);
        let g1_items: Vec<i64> = history.order_groups[0].items.iter().map(|i| i.id).collect();
        assert_eq!(g1_items, vec![i2.id, i1.id]);
        assert_eq!(history.order_groups[1].items.len(), 1);

        users.delete(u).await.unwrap();
    }

    #[tokio::test]
    async fn order_history_for_unknown_user_is_none() {
        let Some(db) = get_db().await else { return };
        let repo = SeaOrmOrderHistoryRepository::new(db);
        assert!(repo.find_order_history(i64::MAX).await.unwrap().is_none());
    }
}

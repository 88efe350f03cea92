//! Persistence capabilities the services depend on.
//!
//! `Repository<M>` is the minimal store contract (find-by-id, paged find-all,
//! save, delete). `OrderHistoryRepository` loads the user → order group → item
//! tree for the aggregating read. Both come in a SeaORM flavour for PostgreSQL
//! and an in-memory flavour for tests and examples.

pub mod memory;
pub mod seaorm;

use async_trait::async_trait;
use common::network::Pagination;
use common::pagination::PageRequest;
use models::{item, order_detail, order_group, user, Record};

use crate::errors::ServiceError;

pub use memory::{InMemoryOrderHistoryRepository, InMemoryRepository};
pub use seaorm::{SeaOrmOrderHistoryRepository, SeaOrmRepository};

/// One page of entities ordered by id, with the store's totals.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<M> {
    pub content: Vec<M>,
    /// 0-based page index
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<M> Page<M> {
    pub fn number_of_elements(&self) -> u64 { self.content.len() as u64 }

    /// A non-empty store was asked for a page past its last one.
    pub fn is_out_of_range(&self) -> bool {
        self.total_pages > 0 && self.number >= self.total_pages
    }

    /// All zeros for an empty store.
    pub fn pagination(&self) -> Pagination {
        Pagination {
            total_pages: self.total_pages,
            total_elements: self.total_elements,
            current_page: if self.total_pages == 0 { 0 } else { self.number },
            current_elements: self.number_of_elements(),
        }
    }
}

pub(crate) fn total_pages(total_elements: u64, size: u64) -> u64 {
    if size == 0 { 0 } else { total_elements.div_ceil(size) }
}

/// Key-addressable store for one entity type.
#[async_trait]
pub trait Repository<M: Record>: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<M>, ServiceError>;

    async fn find_all(&self, page: PageRequest) -> Result<Page<M>, ServiceError>;

    /// Insert when `model.is_new()`, otherwise overwrite every column of the
    /// existing row. Returns the stored model (with its assigned id).
    async fn save(&self, model: M) -> Result<M, ServiceError>;

    async fn delete(&self, model: M) -> Result<(), ServiceError>;
}

/// A user with its order groups, in ascending order-group id.
#[derive(Clone, Debug, PartialEq)]
pub struct UserOrderHistory {
    pub user: user::Model,
    pub order_groups: Vec<OrderGroupHistory>,
}

/// An order group with the items of its details, in ascending order-detail id.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderGroupHistory {
    pub order_group: order_group::Model,
    pub items: Vec<item::Model>,
}

#[async_trait]
pub trait OrderHistoryRepository: Send + Sync {
    /// `None` when no user has this id.
    async fn find_order_history(&self, user_id: i64) -> Result<Option<UserOrderHistory>, ServiceError>;
}

/// Join already-loaded rows into the history tree.
///
/// `groups` and `lines` must already be sorted by id; a detail whose item is
/// missing is a broken foreign key and fails the whole read.
pub(crate) fn assemble_history(
    user: user::Model,
    groups: Vec<order_group::Model>,
    lines: Vec<(order_detail::Model, Option<item::Model>)>,
) -> Result<UserOrderHistory, ServiceError> {
    let mut order_groups: Vec<OrderGroupHistory> = groups
        .into_iter()
        .map(|order_group| OrderGroupHistory { order_group, items: Vec::new() })
        .collect();

    for (detail, item) in lines {
        let item = item.ok_or_else(|| {
            ServiceError::Internal(format!("order_detail {} references missing item {}", detail.id, detail.item_id))
        })?;
        if let Some(group) = order_groups.iter_mut().find(|g| g.order_group.id == detail.order_group_id) {
            group.items.push(item);
        }
    }

    Ok(UserOrderHistory { user, order_groups })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixtures;

    #[test]
    fn page_metrics_feed_pagination() {
        let page = Page { content: vec![1, 2], number: 1, size: 2, total_elements: 5, total_pages: 3 };
        let p = page.pagination();
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.total_elements, 5);
        assert_eq!(p.current_page, 1);
        assert_eq!(p.current_elements, 2);
        assert!(!page.is_out_of_range());
    }

    #[test]
    fn empty_store_is_never_out_of_range() {
        let page: Page<u8> = Page { content: vec![], number: 7, size: 20, total_elements: 0, total_pages: 0 };
        assert!(!page.is_out_of_range());
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn assemble_keeps_group_and_line_order() {
        let u = fixtures::user(1, "u1");
        let g1 = fixtures::order_group(10, 1);
        let g2 = fixtures::order_group(20, 1);
        let (i1, i2, i3) = (fixtures::item(100, "i1"), fixtures::item(200, "i2"), fixtures::item(300, "i3"));
        let lines = vec![
            (fixtures::order_detail(1, 10, 100), Some(i1.clone())),
            (fixtures::order_detail(2, 20, 300), Some(i3.clone())),
            (fixtures::order_detail(3, 10, 200), Some(i2.clone())),
        ];

        let history = assemble_history(u, vec![g1, g2], lines).unwrap();
        assert_eq!(history.order_groups.len(), 2);
        assert_eq!(history.order_groups[0].items, vec![i1, i2]);
        assert_eq!(history.order_groups[1].items, vec![i3]);
    }

    #[test]
    fn assemble_rejects_dangling_item() {
        let lines = vec![(fixtures::order_detail(1, 10, 999), None)];
        let err = assemble_history(fixtures::user(1, "u1"), vec![fixtures::order_group(10, 1)], lines).unwrap_err();
        assert!(matches!(err, ServiceError::Internal(_)));
    }
}

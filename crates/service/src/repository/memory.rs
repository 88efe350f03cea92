//! In-memory stores for unit tests, documentation examples and the
//! database-less server used by the end-to-end tests.

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use common::pagination::PageRequest;
use models::{item, order_detail, order_group, user, Record};

use super::{assemble_history, total_pages, OrderHistoryRepository, Page, Repository, UserOrderHistory};
use crate::errors::ServiceError;

type DeleteRule<M> = Box<dyn Fn(&M) -> Result<(), ServiceError> + Send + Sync>;

/// Rows keyed by id; ids are handed out from a counter starting at 1.
///
/// Rules registered with [`InMemoryRepository::on_delete`] run before a row is
/// removed; an `Err` aborts the delete.
pub struct InMemoryRepository<M> {
    rows: Mutex<BTreeMap<i64, M>>,
    next_id: AtomicI64,
    delete_rules: Mutex<Vec<DeleteRule<M>>>,
}

impl<M: Record> InMemoryRepository<M> {
    pub fn new() -> Self {
        Self { rows: Mutex::new(BTreeMap::new()), next_id: AtomicI64::new(1), delete_rules: Mutex::new(Vec::new()) }
    }

    /// Seed the store. Rows with an id keep it; new rows get the next free one.
    pub fn with_rows(rows: impl IntoIterator<Item = M>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.lock();
            let mut pending = Vec::new();
            for row in rows {
                if row.is_new() { pending.push(row) } else { map.insert(row.id(), row); }
            }
            let start = map.keys().next_back().map_or(1, |max| max + 1);
            repo.next_id.store(start, Ordering::SeqCst);
            for mut row in pending {
                let id = repo.next_id.fetch_add(1, Ordering::SeqCst);
                row.assign_id(id);
                map.insert(id, row);
            }
        }
        repo
    }

    // every write is a single map operation; poisoning is ignored
    fn lock(&self) -> MutexGuard<'_, BTreeMap<i64, M>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, id: i64) -> Option<M> { self.lock().get(&id).cloned() }

    pub fn on_delete(&self, rule: impl Fn(&M) -> Result<(), ServiceError> + Send + Sync + 'static) {
        self.delete_rules.lock().unwrap_or_else(PoisonError::into_inner).push(Box::new(rule));
    }

    /// Drop every row matching `pred`, without running delete rules.
    pub fn remove_where(&self, pred: impl Fn(&M) -> bool) {
        self.lock().retain(|_, row| !pred(row));
    }

    /// Snapshot of every row in id order.
    pub fn all(&self) -> Vec<M> { self.lock().values().cloned().collect() }

    pub fn len(&self) -> usize { self.lock().len() }

    pub fn is_empty(&self) -> bool { self.lock().is_empty() }
}

impl<M: Record> Default for InMemoryRepository<M> {
    fn default() -> Self { Self::new() }
}

#[async_trait]
impl<M: Record> Repository<M> for InMemoryRepository<M> {
    async fn find_by_id(&self, id: i64) -> Result<Option<M>, ServiceError> { Ok(self.get(id)) }

    async fn find_all(&self, page: PageRequest) -> Result<Page<M>, ServiceError> {
        let req = page.normalize();
        let rows = self.lock();
        let total_elements = rows.len() as u64;
        let content = rows
            .values()
            .skip(usize::try_from(req.offset()).unwrap_or(usize::MAX))
            .take(req.size as usize)
            .cloned()
            .collect();
        Ok(Page {
            content,
            number: req.page,
            size: req.size,
            total_elements,
            total_pages: total_pages(total_elements, req.size),
        })
    }

    async fn save(&self, mut model: M) -> Result<M, ServiceError> {
        let mut rows = self.lock();
        if model.is_new() {
            model.assign_id(self.next_id.fetch_add(1, Ordering::SeqCst));
        } else if !rows.contains_key(&model.id()) {
            return Err(ServiceError::Db(format!("record {} not updated", model.id())));
        }
        rows.insert(model.id(), model.clone());
        Ok(model)
    }

    async fn delete(&self, model: M) -> Result<(), ServiceError> {
        for rule in self.delete_rules.lock().unwrap_or_else(PoisonError::into_inner).iter() {
            rule(&model)?;
        }
        self.lock().remove(&model.id());
        Ok(())
    }
}

/// Joins four in-memory stores the way the foreign keys do.
///
/// `new` also installs the schema's delete rules on the stores: a user takes
/// its order groups and their lines with it, an order group takes its lines,
/// and an item still referenced by a line cannot be deleted.
#[derive(Clone)]
pub struct InMemoryOrderHistoryRepository {
    pub users: Arc<InMemoryRepository<user::Model>>,
    pub order_groups: Arc<InMemoryRepository<order_group::Model>>,
    pub order_details: Arc<InMemoryRepository<order_detail::Model>>,
    pub items: Arc<InMemoryRepository<item::Model>>,
}

impl InMemoryOrderHistoryRepository {
    pub fn new(
        users: Arc<InMemoryRepository<user::Model>>,
        order_groups: Arc<InMemoryRepository<order_group::Model>>,
        order_details: Arc<InMemoryRepository<order_detail::Model>>,
        items: Arc<InMemoryRepository<item::Model>>,
    ) -> Self {
        let details = order_details.clone();
        items.on_delete(move |item: &item::Model| {
            if details.lock().values().any(|d| d.item_id == item.id) {
                return Err(ServiceError::Db(format!("item {} is still referenced by an order detail", item.id)));
            }
            Ok(())
        });

        let details = order_details.clone();
        order_groups.on_delete(move |group: &order_group::Model| {
            details.remove_where(|d| d.order_group_id == group.id);
            Ok(())
        });

        let (groups, details) = (order_groups.clone(), order_details.clone());
        users.on_delete(move |user: &user::Model| {
            let group_ids: HashSet<i64> = groups.all().iter().filter(|g| g.user_id == user.id).map(|g| g.id).collect();
            details.remove_where(|d| group_ids.contains(&d.order_group_id));
            groups.remove_where(|g| group_ids.contains(&g.id));
            Ok(())
        });

        Self { users, order_groups, order_details, items }
    }
}

#[async_trait]
impl OrderHistoryRepository for InMemoryOrderHistoryRepository {
    async fn find_order_history(&self, user_id: i64) -> Result<Option<UserOrderHistory>, ServiceError> {
        let Some(found) = self.users.get(user_id) else { return Ok(None) };

        let groups: Vec<order_group::Model> =
            self.order_groups.all().into_iter().filter(|g| g.user_id == user_id).collect();
        let group_ids: HashSet<i64> = groups.iter().map(|g| g.id).collect();
        let lines = self
            .order_details
            .all()
            .into_iter()
            .filter(|d| group_ids.contains(&d.order_group_id))
            .map(|d| {
                let item = self.items.get(d.item_id);
                (d, item)
            })
            .collect();

        assemble_history(found, groups, lines).map(Some)
    }
}

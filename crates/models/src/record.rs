//! Identity contract shared by every persisted model.

/// Id carried by a model that has not been stored yet.
pub const UNSAVED_ID: i64 = 0;

/// A model addressed by a store-assigned `i64` primary key.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;

    /// Set the key handed out by the store on insert.
    fn assign_id(&mut self, id: i64);

    fn is_new(&self) -> bool { self.id() == UNSAVED_ID }
}

macro_rules! impl_record {
    ($($model:path),+ $(,)?) => {
        $(
            impl Record for $model {
                fn id(&self) -> i64 { self.id }
                fn assign_id(&mut self, id: i64) { self.id = id; }
            }
        )+
    };
}

impl_record!(
    crate::category::Model,
    crate::user::Model,
    crate::item::Model,
    crate::order_group::Model,
    crate::order_detail::Model,
);

//! Migrator registering the shop tables in foreign-key order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_category;
mod m20220101_000002_create_user;
mod m20220101_000003_create_item;
mod m20220101_000004_create_order_group;
mod m20220101_000005_create_order_detail;
mod m20220101_000006_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_category::Migration),
            Box::new(m20220101_000002_create_user::Migration),
            Box::new(m20220101_000003_create_item::Migration),
            Box::new(m20220101_000004_create_order_group::Migration),
            Box::new(m20220101_000005_create_order_detail::Migration),
            // Indexes should always be applied last
            Box::new(m20220101_000006_add_indexes::Migration),
        ]
    }
}

//! Create `order_detail` table with FKs to `order_group` and `item`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderDetail::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderDetail::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(OrderDetail::Status, 32).not_null())
                    .col(ColumnDef::new(OrderDetail::ArrivalDate).timestamp_with_time_zone().null())
                    .col(integer(OrderDetail::Quantity).not_null())
                    .col(decimal_len(OrderDetail::TotalPrice, 12, 4).not_null())
                    .col(big_integer(OrderDetail::OrderGroupId).not_null())
                    .col(big_integer(OrderDetail::ItemId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_detail_order_group")
                            .from(OrderDetail::Table, OrderDetail::OrderGroupId)
                            .to(OrderGroup::Table, OrderGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // items referenced by an order cannot be removed
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_detail_item")
                            .from(OrderDetail::Table, OrderDetail::ItemId)
                            .to(Item::Table, Item::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(OrderDetail::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum OrderDetail { Table, Id, Status, ArrivalDate, Quantity, TotalPrice, OrderGroupId, ItemId }

#[derive(DeriveIden)]
enum OrderGroup { Table, Id }

#[derive(DeriveIden)]
enum Item { Table, Id }

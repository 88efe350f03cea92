//! Create `order_group` table with FK to `user`.
//!
//! One row per checkout; its lines live in `order_detail`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderGroup::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderGroup::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(OrderGroup::Status, 32).not_null())
                    .col(string_len(OrderGroup::OrderType, 16).not_null())
                    .col(string_len(OrderGroup::RevAddress, 255).not_null())
                    .col(string_len(OrderGroup::RevName, 64).not_null())
                    .col(string_len(OrderGroup::PaymentType, 32).not_null())
                    .col(decimal_len(OrderGroup::TotalPrice, 12, 4).not_null())
                    .col(integer(OrderGroup::TotalQuantity).not_null())
                    .col(ColumnDef::new(OrderGroup::OrderAt).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(OrderGroup::ArrivalDate).date().null())
                    .col(big_integer(OrderGroup::UserId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_group_user")
                            .from(OrderGroup::Table, OrderGroup::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(OrderGroup::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum OrderGroup {
    Table,
    Id,
    Status,
    OrderType,
    RevAddress,
    RevName,
    PaymentType,
    TotalPrice,
    TotalQuantity,
    OrderAt,
    ArrivalDate,
    UserId,
}

#[derive(DeriveIden)]
enum User { Table, Id }

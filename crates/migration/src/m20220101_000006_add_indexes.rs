use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // OrderGroup: lookup by owner for order history
        manager
            .create_index(
                Index::create()
                    .name("idx_order_group_user")
                    .table(OrderGroup::Table)
                    .col(OrderGroup::UserId)
                    .to_owned(),
            )
            .await?;

        // OrderDetail: lines of a group, batched by group id
        manager
            .create_index(
                Index::create()
                    .name("idx_order_detail_order_group")
                    .table(OrderDetail::Table)
                    .col(OrderDetail::OrderGroupId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_order_detail_item")
                    .table(OrderDetail::Table)
                    .col(OrderDetail::ItemId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uniq_user_account")
                    .table(User::Table)
                    .col(User::Account)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_user_account").table(User::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_order_detail_item").table(OrderDetail::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_order_detail_order_group").table(OrderDetail::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_order_group_user").table(OrderGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum User { Table, Account }

#[derive(DeriveIden)]
enum OrderGroup { Table, UserId }

#[derive(DeriveIden)]
enum OrderDetail { Table, OrderGroupId, ItemId }

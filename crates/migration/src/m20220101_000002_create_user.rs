//! Create `user` table.
//!
//! `status` holds the `UserStatus` string; unregistered users keep their row.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(User::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(User::Account, 64).not_null())
                    .col(string_len(User::Password, 255).not_null())
                    .col(string_len(User::Status, 32).not_null())
                    .col(ColumnDef::new(User::Email).string_len(255).null())
                    .col(ColumnDef::new(User::PhoneNumber).string_len(32).null())
                    .col(ColumnDef::new(User::RegisteredAt).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(User::UnregisteredAt).timestamp_with_time_zone().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(User::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum User { Table, Id, Account, Password, Status, Email, PhoneNumber, RegisteredAt, UnregisteredAt }

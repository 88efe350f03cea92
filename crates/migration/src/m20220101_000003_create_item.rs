//! Create `item` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Item::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Item::Status, 32).not_null())
                    .col(string_len(Item::Name, 128).not_null())
                    .col(string_len(Item::Title, 255).not_null())
                    .col(text(Item::Content).not_null())
                    .col(decimal_len(Item::Price, 12, 4).not_null())
                    .col(ColumnDef::new(Item::BrandName).string_len(128).null())
                    .col(ColumnDef::new(Item::RegisteredAt).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Item::UnregisteredAt).timestamp_with_time_zone().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Item::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Item { Table, Id, Status, Name, Title, Content, Price, BrandName, RegisteredAt, UnregisteredAt }

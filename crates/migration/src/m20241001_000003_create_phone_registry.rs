//! Create `phone_registry`, the single owner of every phone number.
//!
//! `users` and `riders` each insert here in the same transaction as the person
//! row, so the primary key makes a phone unique across both tables.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PhoneRegistry::Table)
                    .if_not_exists()
                    .col(string_len(PhoneRegistry::PhoneNumber, 20).primary_key())
                    .col(string_len(PhoneRegistry::Role, 16).not_null())
                    .col(timestamp_with_time_zone(PhoneRegistry::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PhoneRegistry::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PhoneRegistry { Table, PhoneNumber, Role, CreatedAt }

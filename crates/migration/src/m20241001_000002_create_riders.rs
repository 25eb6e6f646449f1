//! Create `riders` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Riders::Table)
                    .if_not_exists()
                    .col(pk_auto(Riders::Rid))
                    .col(string_len(Riders::PhoneNumber, 20).unique_key().not_null())
                    .col(string_len(Riders::Password, 255).not_null())
                    .col(string_len(Riders::Name, 128).not_null())
                    .col(string_len_null(Riders::ProfileImage, 512))
                    .col(string_len(Riders::LicensePlate, 32).not_null())
                    .col(timestamp_with_time_zone(Riders::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Riders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Riders { Table, Rid, PhoneNumber, Password, Name, ProfileImage, LicensePlate, CreatedAt }

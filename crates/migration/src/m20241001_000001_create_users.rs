//! Create `users` table (senders and receivers).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Uid))
                    .col(string_len(Users::PhoneNumber, 20).unique_key().not_null())
                    .col(string_len(Users::Password, 255).not_null())
                    .col(string_len(Users::Name, 128).not_null())
                    .col(string_len_null(Users::ProfileImage, 512))
                    .col(string_len_null(Users::Address, 512))
                    .col(string_len_null(Users::GpsLocation, 128))
                    .col(timestamp_with_time_zone(Users::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Users { Table, Uid, PhoneNumber, Password, Name, ProfileImage, Address, GpsLocation, CreatedAt }

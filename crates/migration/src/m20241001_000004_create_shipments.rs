//! Create `shipments` header table with FKs to `users` and `riders`.
//!
//! Missing receiver/rider are NULL.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shipments::Table)
                    .if_not_exists()
                    .col(pk_auto(Shipments::Id))
                    .col(integer(Shipments::SenderId).not_null())
                    .col(integer_null(Shipments::ReceiverId))
                    .col(integer_null(Shipments::RiderId))
                    .col(small_integer(Shipments::Status).not_null())
                    .col(timestamp_with_time_zone(Shipments::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shipments_sender")
                            .from(Shipments::Table, Shipments::SenderId)
                            .to(Users::Table, Users::Uid)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shipments_receiver")
                            .from(Shipments::Table, Shipments::ReceiverId)
                            .to(Users::Table, Users::Uid)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shipments_rider")
                            .from(Shipments::Table, Shipments::RiderId)
                            .to(Riders::Table, Riders::Rid)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Shipments::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Shipments { Table, Id, SenderId, ReceiverId, RiderId, Status, CreatedAt }

#[derive(DeriveIden)]
enum Users { Table, Uid }

#[derive(DeriveIden)]
enum Riders { Table, Rid }

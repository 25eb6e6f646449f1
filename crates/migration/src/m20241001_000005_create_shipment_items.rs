//! Create `shipment_items`; rows belong to exactly one shipment.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShipmentItems::Table)
                    .if_not_exists()
                    .col(pk_auto(ShipmentItems::Iid))
                    .col(integer(ShipmentItems::ShipmentId).not_null())
                    .col(string_len(ShipmentItems::Description, 512).not_null())
                    .col(string_len_null(ShipmentItems::Image, 512))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shipment_items_shipment")
                            .from(ShipmentItems::Table, ShipmentItems::ShipmentId)
                            .to(Shipments::Table, Shipments::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ShipmentItems::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ShipmentItems { Table, Iid, ShipmentId, Description, Image }

#[derive(DeriveIden)]
enum Shipments { Table, Id }

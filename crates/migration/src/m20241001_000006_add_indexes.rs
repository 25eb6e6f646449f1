use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Shipments: listed by sender
        manager
            .create_index(
                Index::create()
                    .name("idx_shipments_sender")
                    .table(Shipments::Table)
                    .col(Shipments::SenderId)
                    .to_owned(),
            )
            .await?;

        // ShipmentItems: joined on shipment_id
        manager
            .create_index(
                Index::create()
                    .name("idx_shipment_items_shipment")
                    .table(ShipmentItems::Table)
                    .col(ShipmentItems::ShipmentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_shipments_sender").table(Shipments::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_shipment_items_shipment").table(ShipmentItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Shipments { Table, SenderId }

#[derive(DeriveIden)]
enum ShipmentItems { Table, ShipmentId }

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QuerySelect,
    RelationTrait, Set, TransactionTrait,
};
use tracing::{debug, error};

use models::shipment_row::ShipmentItemRow;
use models::{shipment, shipment_item};

use crate::errors::ServiceError;
use crate::shipment::domain::NewShipment;
use crate::shipment::repository::ShipmentRepository;
use crate::tx::settle;

pub struct SeaOrmShipmentRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmShipmentRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl ShipmentRepository for SeaOrmShipmentRepository {
    async fn create_with_items(&self, new: NewShipment) -> Result<i32, ServiceError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!(error = %e, "begin transaction failed");
            ServiceError::storage(e)
        })?;
        let outcome = async {
            let header = shipment::ActiveModel {
                sender_id: Set(new.sender_id),
                receiver_id: Set(new.receiver_id),
                rider_id: Set(None),
                status: Set(new.status.code()),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            let items = new.items.iter().map(|item| shipment_item::ActiveModel {
                shipment_id: Set(header.id),
                description: Set(item.description.clone()),
                image: Set(item.image.clone()),
                ..Default::default()
            });
            shipment_item::Entity::insert_many(items).exec(&txn).await?;
            debug!(shipment_id = header.id, items = new.items.len(), "shipment rows staged");
            Ok::<_, DbErr>(header.id)
        }
        .await;
        settle(txn, outcome).await.map_err(|e| {
            error!(error = %e, sender_id = new.sender_id, "shipment creation rolled back");
            ServiceError::storage(e)
        })
    }

    async fn rows_by_sender(&self, sender_id: i32) -> Result<Vec<ShipmentItemRow>, ServiceError> {
        shipment::Entity::find()
            .select_only()
            .column_as(shipment::Column::Id, "shipment_id")
            .column(shipment::Column::SenderId)
            .column(shipment::Column::ReceiverId)
            .column(shipment::Column::RiderId)
            .column(shipment::Column::Status)
            .column_as(shipment_item::Column::Iid, "item_id")
            .column(shipment_item::Column::Description)
            .column(shipment_item::Column::Image)
            .join(JoinType::InnerJoin, shipment::Relation::Items.def())
            .filter(shipment::Column::SenderId.eq(sender_id))
            .into_model::<ShipmentItemRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!(error = %e, sender_id, "shipment rows query failed");
                ServiceError::storage(e)
            })
    }
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{rider, shipment_item, user};

/// Status code stored for a freshly created shipment waiting for a rider.
pub const STATUS_PENDING_ASSIGNMENT: i16 = 1;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shipments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub sender_id: i32,
    pub receiver_id: Option<i32>,
    pub rider_id: Option<i32>,
    pub status: i16,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Sender,
    Receiver,
    Rider,
    Items,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Sender => Entity::belongs_to(user::Entity).from(Column::SenderId).to(user::Column::Uid).into(),
            Relation::Receiver => Entity::belongs_to(user::Entity).from(Column::ReceiverId).to(user::Column::Uid).into(),
            Relation::Rider => Entity::belongs_to(rider::Entity).from(Column::RiderId).to(rider::Column::Rid).into(),
            Relation::Items => Entity::has_many(shipment_item::Entity).into(),
        }
    }
}

impl Related<shipment_item::Entity> for Entity {
    fn to() -> RelationDef { Relation::Items.def() }
}

impl ActiveModelBehavior for ActiveModel {}

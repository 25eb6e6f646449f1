use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::shipment;

/// Longest description the `shipment_items.description` column accepts.
pub const DESCRIPTION_MAX_LEN: usize = 512;
pub const IMAGE_MAX_LEN: usize = 512;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shipment_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub iid: i32,
    pub shipment_id: i32,
    pub description: String,
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Shipment }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Shipment => Entity::belongs_to(shipment::Entity)
                .from(Column::ShipmentId)
                .to(shipment::Column::Id)
                .into(),
        }
    }
}

impl Related<shipment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Shipment.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_description(description: &str) -> Result<(), ModelError> {
    if description.trim().is_empty() {
        return Err(ModelError::Validation("item description required".into()));
    }
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(ModelError::Validation(format!("item description longer than {DESCRIPTION_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_image(image: Option<&str>) -> Result<(), ModelError> {
    crate::person::validate_optional_len("item image", image, IMAGE_MAX_LEN)
}

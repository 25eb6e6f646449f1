use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Lifecycle of a shipment. Stored as a small integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    PendingAssignment,
    Assigned,
    InTransit,
    Delivered,
}

impl ShipmentStatus {
    pub fn code(self) -> i16 {
        match self {
            ShipmentStatus::PendingAssignment => models::shipment::STATUS_PENDING_ASSIGNMENT,
            ShipmentStatus::Assigned => 2,
            ShipmentStatus::InTransit => 3,
            ShipmentStatus::Delivered => 4,
        }
    }
}

impl TryFrom<i16> for ShipmentStatus {
    type Error = ServiceError;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(ShipmentStatus::PendingAssignment),
            2 => Ok(ShipmentStatus::Assigned),
            3 => Ok(ShipmentStatus::InTransit),
            4 => Ok(ShipmentStatus::Delivered),
            other => Err(ServiceError::Storage(format!("unknown shipment status code {}", other))),
        }
    }
}

/// Item as supplied by the sender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemInput {
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShipmentInput {
    pub sender_id: i32,
    #[serde(default)]
    pub receiver_phone: Option<String>,
    pub items: Vec<ItemInput>,
}

/// Validated header and items handed to the repository in one piece.
#[derive(Debug, Clone)]
pub struct NewShipment {
    pub sender_id: i32,
    pub receiver_id: Option<i32>,
    pub status: ShipmentStatus,
    pub items: Vec<ItemInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentItem {
    pub item_id: i32,
    pub description: String,
    pub image: Option<String>,
}

/// A shipment header with its full item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    pub shipment_id: i32,
    pub sender_id: i32,
    pub receiver_id: Option<i32>,
    pub rider_id: Option<i32>,
    pub status: ShipmentStatus,
    pub items: Vec<ShipmentItem>,
}

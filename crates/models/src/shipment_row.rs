//! Flat result of joining `shipments` with `shipment_items`: one row per item.
use sea_orm::FromQueryResult;

#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct ShipmentItemRow {
    pub shipment_id: i32,
    pub sender_id: i32,
    pub receiver_id: Option<i32>,
    pub rider_id: Option<i32>,
    pub status: i16,
    pub item_id: i32,
    pub description: String,
    pub image: Option<String>,
}

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use service::shipment::domain::CreateShipmentInput;
use service::shipment::{Shipment, ShipmentItem, ShipmentStatus};

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateDeliveryResponse {
    pub message: String,
    pub shipment_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemView {
    pub item_id: i32,
    pub description: String,
    pub image: Option<String>,
}

/// A shipment with its items. Absent receiver or rider is `null`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShipmentView {
    pub shipment_id: i32,
    pub sender_id: i32,
    pub receiver_id: Option<i32>,
    pub rider_id: Option<i32>,
    /// `pending_assignment`, `assigned`, `in_transit` or `delivered`
    #[schema(value_type = String)]
    pub status: ShipmentStatus,
    pub items: Vec<ItemView>,
}

impl From<ShipmentItem> for ItemView {
    fn from(i: ShipmentItem) -> Self {
        Self { item_id: i.item_id, description: i.description, image: i.image }
    }
}

impl From<Shipment> for ShipmentView {
    fn from(s: Shipment) -> Self {
        Self {
            shipment_id: s.shipment_id,
            sender_id: s.sender_id,
            receiver_id: s.receiver_id,
            rider_id: s.rider_id,
            status: s.status,
            items: s.items.into_iter().map(ItemView::from).collect(),
        }
    }
}

#[utoipa::path(post, path = "/create-delivery", tag = "delivery",
    request_body = crate::openapi::CreateDeliveryRequest,
    responses(
        (status = 201, description = "Shipment created", body = CreateDeliveryResponse),
        (status = 400, description = "No items or invalid item", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Sender or receiver not found", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Storage failure; nothing was written", body = crate::openapi::ErrorResponse),
    ))]
pub async fn create_delivery(
    State(state): State<ServerState>,
    body: Result<Json<CreateShipmentInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateDeliveryResponse>), ApiError> {
    let Json(input) = body?;
    let shipment_id = state.shipments.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateDeliveryResponse { message: "Shipment created successfully".into(), shipment_id }),
    ))
}

#[utoipa::path(post, path = "/get/list_user_send/{sender_id}", tag = "delivery",
    params(("sender_id" = i32, Path, description = "User id of the sender")),
    responses(
        (status = 200, description = "Shipments sent by the user", body = [ShipmentView]),
        (status = 400, description = "sender_id is not an integer", body = crate::openapi::ErrorResponse),
        (status = 404, description = "No shipments found for this sender", body = crate::openapi::ErrorResponse),
    ))]
pub async fn list_user_send(
    State(state): State<ServerState>,
    sender_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<ShipmentView>>, ApiError> {
    let Path(sender_id) = sender_id?;
    let shipments = state.shipments.list_by_sender(sender_id).await?;
    Ok(Json(shipments.into_iter().map(ShipmentView::from).collect()))
}

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchUserRequest {
    pub phone: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReceiverResponse {
    pub receiver_id: i32,
    pub receiver_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LicensePlateResponse {
    pub license_plate: String,
}

/// Exact phone match against registered users.
#[utoipa::path(post, path = "/search-user", tag = "lookup",
    request_body = SearchUserRequest,
    responses(
        (status = 200, description = "Receiver found", body = ReceiverResponse),
        (status = 400, description = "Phone number is required", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Receiver not found", body = crate::openapi::ErrorResponse),
    ))]
pub async fn search_user(
    State(state): State<ServerState>,
    body: Result<Json<SearchUserRequest>, JsonRejection>,
) -> Result<Json<ReceiverResponse>, ApiError> {
    let Json(req) = body?;
    let r = state.lookup.search_receiver(&req.phone).await?;
    Ok(Json(ReceiverResponse { receiver_id: r.receiver_id, receiver_name: r.receiver_name }))
}

#[utoipa::path(post, path = "/get/rider/{rider_id}", tag = "lookup",
    params(("rider_id" = i32, Path, description = "Rider id")),
    responses(
        (status = 200, description = "Rider licence plate", body = LicensePlateResponse),
        (status = 404, description = "Rider not found", body = crate::openapi::ErrorResponse),
    ))]
pub async fn rider_license(
    State(state): State<ServerState>,
    rider_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<LicensePlateResponse>, ApiError> {
    let Path(rider_id) = rider_id?;
    let rider = state.lookup.rider_profile(rider_id).await?;
    Ok(Json(LicensePlateResponse { license_plate: rider.license_plate }))
}

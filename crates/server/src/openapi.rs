use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::routes::auth::{LoginResponse, RegisterResponse};
use crate::routes::delivery::{CreateDeliveryResponse, ItemView, ShipmentView};
use crate::routes::lookup::{LicensePlateResponse, ReceiverResponse, SearchUserRequest};

// Request bodies are decoded straight into service input types; these mirror them for the document.

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String, pub code: u16 }

#[derive(ToSchema)]
pub struct RegisterRiderRequest {
    pub phone_number: String,
    pub password: String,
    pub name: String,
    pub profile_image: Option<String>,
    pub license_plate: String,
}

/// At least one of `address` and `gps_location` is required.
#[derive(ToSchema)]
pub struct RegisterUserRequest {
    pub phone_number: String,
    pub password: String,
    pub name: String,
    pub profile_image: Option<String>,
    pub address: Option<String>,
    pub gps_location: Option<String>,
}

#[derive(ToSchema)]
pub struct LoginRequest { pub phone_number: String, pub password: String }

#[derive(ToSchema)]
pub struct ItemRequest { pub description: String, pub image: Option<String> }

#[derive(ToSchema)]
pub struct CreateDeliveryRequest {
    pub sender_id: i32,
    pub receiver_phone: Option<String>,
    pub items: Vec<ItemRequest>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::register_rider,
        crate::routes::auth::register_user,
        crate::routes::auth::login,
        crate::routes::delivery::create_delivery,
        crate::routes::delivery::list_user_send,
        crate::routes::lookup::search_user,
        crate::routes::lookup::rider_license,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            RegisterRiderRequest,
            RegisterUserRequest,
            LoginRequest,
            ItemRequest,
            CreateDeliveryRequest,
            RegisterResponse,
            LoginResponse,
            CreateDeliveryResponse,
            ItemView,
            ShipmentView,
            SearchUserRequest,
            ReceiverResponse,
            LicensePlateResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "delivery"),
        (name = "lookup")
    )
)]
pub struct ApiDoc;

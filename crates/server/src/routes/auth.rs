use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use service::auth::domain::{AuthIdentity, LoginInput, RegisterRiderInput, RegisterUserInput};

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub id: i32,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub id: i32,
    /// `user` or `rider`
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub role: service::person::Role,
}

impl From<AuthIdentity> for LoginResponse {
    fn from(who: AuthIdentity) -> Self {
        Self { id: who.id, role: who.role }
    }
}

#[utoipa::path(post, path = "/api/rider/register", tag = "auth",
    request_body = crate::openapi::RegisterRiderRequest,
    responses(
        (status = 201, description = "Rider registered", body = RegisterResponse),
        (status = 400, description = "Missing or invalid field", body = crate::openapi::ErrorResponse),
        (status = 409, description = "Phone number already registered", body = crate::openapi::ErrorResponse),
    ))]
pub async fn register_rider(
    State(state): State<ServerState>,
    body: Result<Json<RegisterRiderInput>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let Json(input) = body?;
    let id = state.auth.register_rider(input).await?;
    Ok((StatusCode::CREATED, Json(RegisterResponse { id, message: "Rider registered successfully".into() })))
}

#[utoipa::path(post, path = "/api/user/register", tag = "auth",
    request_body = crate::openapi::RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Missing or invalid field", body = crate::openapi::ErrorResponse),
        (status = 409, description = "Phone number already registered", body = crate::openapi::ErrorResponse),
    ))]
pub async fn register_user(
    State(state): State<ServerState>,
    body: Result<Json<RegisterUserInput>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let Json(input) = body?;
    let id = state.auth.register_user(input).await?;
    Ok((StatusCode::CREATED, Json(RegisterResponse { id, message: "User registered successfully".into() })))
}

#[utoipa::path(post, path = "/api/auth/login", tag = "auth",
    request_body = crate::openapi::LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, description = "Missing phone number or password", body = crate::openapi::ErrorResponse),
        (status = 401, description = "Invalid credentials", body = crate::openapi::ErrorResponse),
    ))]
pub async fn login(
    State(state): State<ServerState>,
    body: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(input) = body?;
    let who = state.auth.login(input).await?;
    Ok(Json(who.into()))
}

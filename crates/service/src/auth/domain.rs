use serde::{Deserialize, Serialize};

use crate::person::Role;

/// Rider registration input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRiderInput {
    pub phone_number: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    pub license_plate: String,
}

/// User registration input; needs an address, a GPS location, or both
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserInput {
    pub phone_number: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub gps_location: Option<String>,
}

/// Login input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub phone_number: String,
    pub password: String,
}

/// Who logged in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthIdentity {
    pub id: i32,
    #[serde(rename = "type")]
    pub role: Role,
}

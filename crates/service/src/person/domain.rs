use serde::{Deserialize, Serialize};

/// Which person table a phone number belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Rider,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => models::phone_registry::ROLE_USER,
            Role::Rider => models::phone_registry::ROLE_RIDER,
        }
    }
}

/// Result of a credential lookup: who owns the phone and the hash to verify against.
#[derive(Debug, Clone)]
pub struct PersonCredentials {
    pub id: i32,
    pub role: Role,
    pub password_hash: String,
}

/// A user row ready for insertion; every field is already trimmed and validated.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub phone_number: String,
    pub password_hash: String,
    pub name: String,
    pub profile_image: Option<String>,
    pub address: Option<String>,
    pub gps_location: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewRider {
    pub phone_number: String,
    pub password_hash: String,
    pub name: String,
    pub profile_image: Option<String>,
    pub license_plate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiderProfile {
    pub id: i32,
    pub name: String,
    pub license_plate: String,
}

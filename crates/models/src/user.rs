use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::person::validate_optional_len;

pub const ADDRESS_MAX_LEN: usize = 512;
pub const GPS_LOCATION_MAX_LEN: usize = 128;

/// Senders and receivers of shipments.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub uid: i32,
    #[sea_orm(unique)]
    pub phone_number: String,
    /// Argon2 PHC string, never the plain password.
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub profile_image: Option<String>,
    pub address: Option<String>,
    pub gps_location: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Users need somewhere to deliver to: a street address, a GPS fix, or both.
pub fn validate_location(address: Option<&str>, gps_location: Option<&str>) -> Result<(), ModelError> {
    if address.is_none() && gps_location.is_none() {
        return Err(ModelError::Validation("either address or GPS location must be provided".into()));
    }
    validate_optional_len("address", address, ADDRESS_MAX_LEN)?;
    validate_optional_len("gps_location", gps_location, GPS_LOCATION_MAX_LEN)
}

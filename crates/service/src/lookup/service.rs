use std::sync::Arc;

use common::utils::text::non_empty;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::errors::ServiceError;
use crate::person::domain::RiderProfile;
use crate::person::PersonRepository;

/// A user that can be named as the receiver of a shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receiver {
    pub receiver_id: i32,
    pub receiver_name: String,
}

pub struct LookupService {
    people: Arc<dyn PersonRepository>,
}

impl LookupService {
    pub fn new(people: Arc<dyn PersonRepository>) -> Self { Self { people } }

    /// Exact match on a user's phone number. Riders are never returned.
    #[instrument(skip(self))]
    pub async fn search_receiver(&self, phone: &str) -> Result<Receiver, ServiceError> {
        let phone = non_empty(phone).ok_or_else(|| ServiceError::Validation("Phone number is required".into()))?;
        self.people
            .find_user_by_phone(&phone)
            .await?
            .map(|u| Receiver { receiver_id: u.id, receiver_name: u.name })
            .ok_or_else(|| ServiceError::not_found("Receiver"))
    }

    #[instrument(skip(self))]
    pub async fn rider_profile(&self, rider_id: i32) -> Result<RiderProfile, ServiceError> {
        self.people.find_rider(rider_id).await?.ok_or_else(|| ServiceError::not_found("Rider"))
    }
}

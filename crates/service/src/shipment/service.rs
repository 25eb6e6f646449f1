use std::sync::Arc;

use common::utils::text::non_empty_opt;
use models::shipment_item;
use tracing::{info, instrument};

use super::aggregate::group_rows;
use super::domain::{CreateShipmentInput, ItemInput, NewShipment, Shipment, ShipmentStatus};
use super::repository::ShipmentRepository;
use crate::errors::ServiceError;
use crate::person::PersonRepository;

pub struct ShipmentService {
    shipments: Arc<dyn ShipmentRepository>,
    people: Arc<dyn PersonRepository>,
}

impl ShipmentService {
    pub fn new(shipments: Arc<dyn ShipmentRepository>, people: Arc<dyn PersonRepository>) -> Self {
        Self { shipments, people }
    }

    /// Create a shipment with its items and return the new id.
    ///
    /// All validation happens before anything is written. A receiver phone,
    /// when given, must belong to a registered user.
    ///
    /// # Examples
    /// ```
    /// use service::shipment::{ShipmentService, domain::{CreateShipmentInput, ItemInput}};
    /// use service::shipment::repository::mock::MockShipmentRepository;
    /// use service::person::repository::{PersonRepository, mock::MockPersonRepository};
    /// use service::person::domain::NewUser;
    /// use std::sync::Arc;
    /// let people = Arc::new(MockPersonRepository::default());
    /// let sender = tokio_test::block_on(people.insert_user(NewUser {
    ///     phone_number: "0811111111".into(), password_hash: "x".into(), name: "S".into(),
    ///     profile_image: None, address: Some("1 Main Rd".into()), gps_location: None,
    /// })).unwrap();
    /// let svc = ShipmentService::new(Arc::new(MockShipmentRepository::default()), people);
    /// let input = CreateShipmentInput {
    ///     sender_id: sender, receiver_phone: None,
    ///     items: vec![ItemInput { description: "box".into(), image: None }],
    /// };
    /// let id = tokio_test::block_on(svc.create(input)).unwrap();
    /// let list = tokio_test::block_on(svc.list_by_sender(sender)).unwrap();
    /// assert_eq!(list[0].shipment_id, id);
    /// assert_eq!(list[0].receiver_id, None);
    /// ```
    #[instrument(skip(self, input), fields(sender_id = input.sender_id, items = input.items.len()))]
    pub async fn create(&self, input: CreateShipmentInput) -> Result<i32, ServiceError> {
        if input.items.is_empty() {
            return Err(ServiceError::Validation("At least one item is required".into()));
        }
        let items = input
            .items
            .into_iter()
            .map(|item| {
                let description = item.description.trim().to_string();
                shipment_item::validate_description(&description)?;
                let image = non_empty_opt(item.image.as_deref());
                shipment_item::validate_image(image.as_deref())?;
                Ok(ItemInput { description, image })
            })
            .collect::<Result<Vec<_>, ServiceError>>()?;

        if !self.people.user_exists(input.sender_id).await? {
            return Err(ServiceError::not_found("Sender"));
        }
        let receiver_id = match non_empty_opt(input.receiver_phone.as_deref()) {
            Some(phone) => match self.people.find_user_by_phone(&phone).await? {
                Some(receiver) => Some(receiver.id),
                None => return Err(ServiceError::not_found("Receiver")),
            },
            None => None,
        };

        let id = self
            .shipments
            .create_with_items(NewShipment {
                sender_id: input.sender_id,
                receiver_id,
                status: ShipmentStatus::PendingAssignment,
                items,
            })
            .await?;
        info!(shipment_id = id, ?receiver_id, "shipment_created");
        Ok(id)
    }

    /// Every shipment sent by `sender_id`, each with its full item list.
    #[instrument(skip(self))]
    pub async fn list_by_sender(&self, sender_id: i32) -> Result<Vec<Shipment>, ServiceError> {
        let rows = self.shipments.rows_by_sender(sender_id).await?;
        let shipments = group_rows(rows)?;
        if shipments.is_empty() {
            return Err(ServiceError::NotFound("No shipments found for this sender".into()));
        }
        Ok(shipments)
    }
}

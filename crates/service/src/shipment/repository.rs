use async_trait::async_trait;
use models::shipment_row::ShipmentItemRow;

use super::domain::NewShipment;
use crate::errors::ServiceError;

/// Persistence for shipments and their items.
#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    /// Insert the header and every item as one unit of work and return the
    /// new shipment id. On error nothing is left behind.
    async fn create_with_items(&self, shipment: NewShipment) -> Result<i32, ServiceError>;

    /// One row per item of every shipment sent by `sender_id`, in no particular order.
    async fn rows_by_sender(&self, sender_id: i32) -> Result<Vec<ShipmentItemRow>, ServiceError>;
}

/// In-memory repository for tests, doc examples and benches
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Clone)]
    struct Header {
        id: i32,
        sender_id: i32,
        receiver_id: Option<i32>,
        status: i16,
    }

    #[derive(Clone)]
    struct Item {
        iid: i32,
        shipment_id: i32,
        description: String,
        image: Option<String>,
    }

    #[derive(Default)]
    struct Tables {
        headers: Vec<Header>,
        items: Vec<Item>,
    }

    /// In-memory shipments store for tests.
    ///
    /// State sits behind `std::sync::Mutex` and every method locks with `unwrap()`,
    /// so a test that panics while holding a lock makes later calls on the same
    /// instance panic too.
    #[derive(Default)]
    pub struct MockShipmentRepository {
        tables: Mutex<Tables>,
        fail_on_item: Mutex<Option<usize>>,
        rows_reversed: Mutex<bool>,
    }

    impl MockShipmentRepository {
        /// Fail every later creation when it reaches the item at `index`,
        /// after the header has been written inside the unit of work.
        pub fn fail_on_item(&self, index: usize) {
            *self.fail_on_item.lock().unwrap() = Some(index);
        }

        /// Return rows newest first, so rows of one shipment arrive out of insertion order.
        pub fn reverse_rows(&self) {
            *self.rows_reversed.lock().unwrap() = true;
        }

        /// Committed (headers, items).
        pub fn counts(&self) -> (usize, usize) {
            let t = self.tables.lock().unwrap();
            (t.headers.len(), t.items.len())
        }
    }

    #[async_trait]
    impl ShipmentRepository for MockShipmentRepository {
        async fn create_with_items(&self, shipment: NewShipment) -> Result<i32, ServiceError> {
            let fail_at = *self.fail_on_item.lock().unwrap();
            let mut t = self.tables.lock().unwrap();

            // stage everything, publish only at the end
            let id = t.headers.last().map(|h| h.id).unwrap_or(0) + 1;
            let header = Header {
                id,
                sender_id: shipment.sender_id,
                receiver_id: shipment.receiver_id,
                status: shipment.status.code(),
            };
            let mut next_iid = t.items.last().map(|i| i.iid).unwrap_or(0);
            let mut staged = Vec::with_capacity(shipment.items.len());
            for (n, item) in shipment.items.into_iter().enumerate() {
                if fail_at == Some(n) {
                    return Err(ServiceError::storage(format!("forced failure inserting item {}", n)));
                }
                next_iid += 1;
                staged.push(Item { iid: next_iid, shipment_id: id, description: item.description, image: item.image });
            }
            t.headers.push(header);
            t.items.extend(staged);
            Ok(id)
        }

        async fn rows_by_sender(&self, sender_id: i32) -> Result<Vec<ShipmentItemRow>, ServiceError> {
            let t = self.tables.lock().unwrap();
            let mut rows: Vec<ShipmentItemRow> = t
                .items
                .iter()
                .filter_map(|item| {
                    let h = t.headers.iter().find(|h| h.id == item.shipment_id && h.sender_id == sender_id)?;
                    Some(ShipmentItemRow {
                        shipment_id: h.id,
                        sender_id: h.sender_id,
                        receiver_id: h.receiver_id,
                        rider_id: None,
                        status: h.status,
                        item_id: item.iid,
                        description: item.description.clone(),
                        image: item.image.clone(),
                    })
                })
                .collect();
            if *self.rows_reversed.lock().unwrap() {
                rows.reverse();
            }
            Ok(rows)
        }
    }
}

//! Rebuild shipment aggregates from joined header/item rows.
use std::collections::HashMap;

use models::shipment_row::ShipmentItemRow;

use super::domain::{Shipment, ShipmentItem, ShipmentStatus};
use crate::errors::ServiceError;

/// Group rows by shipment id.
///
/// Rows of one shipment need not be adjacent. Shipments come out in the order
/// their first row was seen and items keep their row order.
pub fn group_rows<I>(rows: I) -> Result<Vec<Shipment>, ServiceError>
where
    I: IntoIterator<Item = ShipmentItemRow>,
{
    let mut index: HashMap<i32, usize> = HashMap::new();
    let mut shipments: Vec<Shipment> = Vec::new();

    for row in rows {
        let item = ShipmentItem { item_id: row.item_id, description: row.description, image: row.image };
        match index.get(&row.shipment_id) {
            Some(&pos) => shipments[pos].items.push(item),
            None => {
                index.insert(row.shipment_id, shipments.len());
                shipments.push(Shipment {
                    shipment_id: row.shipment_id,
                    sender_id: row.sender_id,
                    receiver_id: row.receiver_id,
                    rider_id: row.rider_id,
                    status: ShipmentStatus::try_from(row.status)?,
                    items: vec![item],
                });
            }
        }
    }
    Ok(shipments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn row(shipment_id: i32, item_id: i32) -> ShipmentItemRow {
        ShipmentItemRow {
            shipment_id,
            sender_id: 7,
            receiver_id: if shipment_id % 2 == 0 { Some(9) } else { None },
            rider_id: None,
            status: 1,
            item_id,
            description: format!("item-{item_id}"),
            image: None,
        }
    }

    #[test]
    fn interleaved_rows_are_grouped() {
        let rows = vec![row(1, 10), row(2, 20), row(1, 11), row(3, 30), row(2, 21)];
        let out = group_rows(rows).unwrap();
        let ids: Vec<i32> = out.iter().map(|s| s.shipment_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let items: Vec<i32> = out[0].items.iter().map(|i| i.item_id).collect();
        assert_eq!(items, vec![10, 11]);
        assert_eq!(out[1].receiver_id, Some(9));
        assert_eq!(out[2].items.len(), 1);
    }

    #[test]
    fn no_rows_no_shipments() {
        assert!(group_rows(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn unknown_status_is_an_error() {
        let mut bad = row(1, 1);
        bad.status = 42;
        assert!(matches!(group_rows(vec![bad]), Err(ServiceError::Storage(_))));
    }

    fn rows_strategy() -> impl Strategy<Value = Vec<ShipmentItemRow>> {
        // up to 8 shipments with 1..5 items each; item ids are globally unique
        prop::collection::vec(1usize..5, 1..8).prop_map(|sizes| {
            let mut rows = Vec::new();
            let mut next_item = 1;
            for (s, n) in sizes.into_iter().enumerate() {
                for _ in 0..n {
                    rows.push(row(s as i32 + 1, next_item));
                    next_item += 1;
                }
            }
            rows
        })
    }

    proptest! {
        #[test]
        fn grouping_ignores_row_order(
            (in_order, shuffled) in rows_strategy()
                .prop_flat_map(|rows| (Just(rows.clone()), Just(rows).prop_shuffle()))
        ) {
            let mut expected = group_rows(in_order).unwrap();
            let mut actual = group_rows(shuffled.clone()).unwrap();

            // each shipment's items follow the relative order of the shuffled rows
            for s in &actual {
                let seen: Vec<i32> = shuffled.iter()
                    .filter(|r| r.shipment_id == s.shipment_id)
                    .map(|r| r.item_id)
                    .collect();
                let got: Vec<i32> = s.items.iter().map(|i| i.item_id).collect();
                prop_assert_eq!(got, seen);
            }

            expected.sort_by_key(|s| s.shipment_id);
            actual.sort_by_key(|s| s.shipment_id);
            for s in expected.iter_mut().chain(actual.iter_mut()) {
                s.items.sort_by_key(|i| i.item_id);
            }
            prop_assert_eq!(actual, expected);
        }
    }
}

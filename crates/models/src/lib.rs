pub mod errors;
pub mod db;
pub mod person;
pub mod user;
pub mod rider;
pub mod phone_registry;
pub mod shipment;
pub mod shipment_item;
pub mod shipment_row;

#[cfg(test)]
mod tests;

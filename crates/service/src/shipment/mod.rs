//! Shipments: atomic header+items creation and per-sender listing.

pub mod aggregate;
pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{Shipment, ShipmentItem, ShipmentStatus};
pub use repository::ShipmentRepository;
pub use service::ShipmentService;

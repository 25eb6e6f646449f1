//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20241001_000001_create_users;
mod m20241001_000002_create_riders;
mod m20241001_000003_create_phone_registry;
mod m20241001_000004_create_shipments;
mod m20241001_000005_create_shipment_items;
mod m20241001_000006_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241001_000001_create_users::Migration),
            Box::new(m20241001_000002_create_riders::Migration),
            Box::new(m20241001_000003_create_phone_registry::Migration),
            Box::new(m20241001_000004_create_shipments::Migration),
            Box::new(m20241001_000005_create_shipment_items::Migration),
            // Indexes should always be applied last
            Box::new(m20241001_000006_add_indexes::Migration),
        ]
    }
}

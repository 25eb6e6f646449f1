//! Business services for the courier backend.
//! - Framework independent: the HTTP adapter lives in the `server` crate.
//! - Storage is reached only through the repository traits, injected at construction.
//! - Every repository has a SeaORM implementation and an in-memory mock.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

pub mod auth;
pub mod errors;
pub mod lookup;
pub mod person;
pub mod shipment;
#[cfg(test)]
pub mod test_support;
mod tx;

use auth::{password::PasswordService, AuthService};
use errors::ServiceError;
use lookup::LookupService;
use person::{repo::SeaOrmPersonRepository, PersonRepository};
use shipment::{repo::SeaOrmShipmentRepository, ShipmentRepository, ShipmentService};

/// All services, wired to one pair of repositories.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<AuthService>,
    pub shipments: Arc<ShipmentService>,
    pub lookup: Arc<LookupService>,
}

impl Services {
    pub fn new(
        people: Arc<dyn PersonRepository>,
        shipments: Arc<dyn ShipmentRepository>,
        passwords: PasswordService,
    ) -> Self {
        Self {
            auth: Arc::new(AuthService::new(people.clone(), passwords)),
            shipments: Arc::new(ShipmentService::new(shipments, people.clone())),
            lookup: Arc::new(LookupService::new(people)),
        }
    }

    /// Services backed by Postgres through SeaORM.
    pub fn seaorm(db: DatabaseConnection, auth: &configs::AuthConfig) -> Result<Self, ServiceError> {
        let people = Arc::new(SeaOrmPersonRepository::new(db.clone()));
        let shipments = Arc::new(SeaOrmShipmentRepository::new(db));
        Ok(Self::new(people, shipments, PasswordService::new(auth)?))
    }
}

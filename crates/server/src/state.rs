use std::sync::Arc;

use service::auth::AuthService;
use service::lookup::LookupService;
use service::shipment::ShipmentService;
use service::Services;

/// Shared handler state. Cloned per request, so everything inside is an `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub auth: Arc<AuthService>,
    pub shipments: Arc<ShipmentService>,
    pub lookup: Arc<LookupService>,
}

impl From<Services> for ServerState {
    fn from(s: Services) -> Self {
        Self { auth: s.auth, shipments: s.shipments, lookup: s.lookup }
    }
}

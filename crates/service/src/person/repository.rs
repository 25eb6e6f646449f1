use async_trait::async_trait;

use super::domain::{NewRider, NewUser, PersonCredentials, RiderProfile, UserSummary};
use crate::errors::ServiceError;

/// Persistence for users and riders.
///
/// A phone number belongs to at most one person across both tables. Inserts
/// must enforce that themselves and report a clash as `ServiceError::Conflict`,
/// since the service-level pre-check can race with a concurrent registration.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Riders are consulted first, then users; the first match wins.
    async fn find_credentials_by_phone(&self, phone: &str) -> Result<Option<PersonCredentials>, ServiceError>;
    async fn phone_exists(&self, phone: &str) -> Result<bool, ServiceError>;
    async fn insert_user(&self, user: NewUser) -> Result<i32, ServiceError>;
    async fn insert_rider(&self, rider: NewRider) -> Result<i32, ServiceError>;
    /// Exact phone match against the `users` table only.
    async fn find_user_by_phone(&self, phone: &str) -> Result<Option<UserSummary>, ServiceError>;
    async fn user_exists(&self, id: i32) -> Result<bool, ServiceError>;
    async fn find_rider(&self, id: i32) -> Result<Option<RiderProfile>, ServiceError>;
}

/// In-memory repository for tests, doc examples and benches
pub mod mock {
    use super::*;
    use crate::person::domain::Role;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Tables {
        users: Vec<(i32, NewUser)>,
        riders: Vec<(i32, NewRider)>,
        phones: HashMap<String, Role>, // stands in for phone_registry
    }

    /// In-memory people store for tests.
    ///
    /// State sits behind `std::sync::Mutex` and every method locks with `unwrap()`,
    /// so a test that panics while holding a lock makes later calls on the same
    /// instance panic too.
    #[derive(Default)]
    pub struct MockPersonRepository {
        tables: Mutex<Tables>,
        unavailable: AtomicBool,
    }

    impl MockPersonRepository {
        /// Make every call fail with a storage error, as if the database were down.
        pub fn set_unavailable(&self, down: bool) {
            self.unavailable.store(down, Ordering::SeqCst);
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(ServiceError::storage("mock storage unavailable"));
            }
            Ok(())
        }

        fn claim(tables: &mut Tables, phone: &str, role: Role) -> Result<(), ServiceError> {
            if tables.phones.contains_key(phone) {
                return Err(ServiceError::Conflict("Phone number already registered".into()));
            }
            tables.phones.insert(phone.to_string(), role);
            Ok(())
        }
    }

    #[async_trait]
    impl PersonRepository for MockPersonRepository {
        async fn find_credentials_by_phone(&self, phone: &str) -> Result<Option<PersonCredentials>, ServiceError> {
            self.check()?;
            let t = self.tables.lock().unwrap();
            if let Some((id, r)) = t.riders.iter().find(|(_, r)| r.phone_number == phone) {
                return Ok(Some(PersonCredentials { id: *id, role: Role::Rider, password_hash: r.password_hash.clone() }));
            }
            Ok(t.users
                .iter()
                .find(|(_, u)| u.phone_number == phone)
                .map(|(id, u)| PersonCredentials { id: *id, role: Role::User, password_hash: u.password_hash.clone() }))
        }

        async fn phone_exists(&self, phone: &str) -> Result<bool, ServiceError> {
            self.check()?;
            Ok(self.tables.lock().unwrap().phones.contains_key(phone))
        }

        async fn insert_user(&self, user: NewUser) -> Result<i32, ServiceError> {
            self.check()?;
            let mut t = self.tables.lock().unwrap();
            Self::claim(&mut t, &user.phone_number, Role::User)?;
            let id = t.users.len() as i32 + 1;
            t.users.push((id, user));
            Ok(id)
        }

        async fn insert_rider(&self, rider: NewRider) -> Result<i32, ServiceError> {
            self.check()?;
            let mut t = self.tables.lock().unwrap();
            Self::claim(&mut t, &rider.phone_number, Role::Rider)?;
            let id = t.riders.len() as i32 + 1;
            t.riders.push((id, rider));
            Ok(id)
        }

        async fn find_user_by_phone(&self, phone: &str) -> Result<Option<UserSummary>, ServiceError> {
            self.check()?;
            let t = self.tables.lock().unwrap();
            Ok(t.users
                .iter()
                .find(|(_, u)| u.phone_number == phone)
                .map(|(id, u)| UserSummary { id: *id, name: u.name.clone(), phone_number: u.phone_number.clone() }))
        }

        async fn user_exists(&self, id: i32) -> Result<bool, ServiceError> {
            self.check()?;
            Ok(self.tables.lock().unwrap().users.iter().any(|(uid, _)| *uid == id))
        }

        async fn find_rider(&self, id: i32) -> Result<Option<RiderProfile>, ServiceError> {
            self.check()?;
            let t = self.tables.lock().unwrap();
            Ok(t.riders
                .iter()
                .find(|(rid, _)| *rid == id)
                .map(|(rid, r)| RiderProfile { id: *rid, name: r.name.clone(), license_plate: r.license_plate.clone() }))
        }
    }
}

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::error;

use models::{phone_registry, rider, user};

use crate::errors::ServiceError;
use crate::person::domain::{NewRider, NewUser, PersonCredentials, RiderProfile, Role, UserSummary};
use crate::person::repository::PersonRepository;
use crate::tx::{map_write_err, settle};

const PHONE_TAKEN: &str = "Phone number already registered";

pub struct SeaOrmPersonRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmPersonRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn read_err(e: DbErr) -> ServiceError {
    error!(error = %e, "person lookup failed");
    ServiceError::storage(e)
}

fn registry_entry(phone: &str, role: Role) -> phone_registry::ActiveModel {
    phone_registry::ActiveModel {
        phone_number: Set(phone.to_string()),
        role: Set(role.as_str().to_string()),
        created_at: Set(Utc::now().into()),
    }
}

#[async_trait::async_trait]
impl PersonRepository for SeaOrmPersonRepository {
    async fn find_credentials_by_phone(&self, phone: &str) -> Result<Option<PersonCredentials>, ServiceError> {
        let found = rider::Entity::find()
            .filter(rider::Column::PhoneNumber.eq(phone))
            .one(&self.db)
            .await
            .map_err(read_err)?;
        if let Some(r) = found {
            return Ok(Some(PersonCredentials { id: r.rid, role: Role::Rider, password_hash: r.password }));
        }
        let found = user::Entity::find()
            .filter(user::Column::PhoneNumber.eq(phone))
            .one(&self.db)
            .await
            .map_err(read_err)?;
        Ok(found.map(|u| PersonCredentials { id: u.uid, role: Role::User, password_hash: u.password }))
    }

    async fn phone_exists(&self, phone: &str) -> Result<bool, ServiceError> {
        let res = phone_registry::Entity::find_by_id(phone.to_string())
            .one(&self.db)
            .await
            .map_err(read_err)?;
        Ok(res.is_some())
    }

    async fn insert_user(&self, new: NewUser) -> Result<i32, ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::storage)?;
        let outcome = async {
            registry_entry(&new.phone_number, Role::User).insert(&txn).await?;
            let created = user::ActiveModel {
                phone_number: Set(new.phone_number.clone()),
                password: Set(new.password_hash.clone()),
                name: Set(new.name.clone()),
                profile_image: Set(new.profile_image.clone()),
                address: Set(new.address.clone()),
                gps_location: Set(new.gps_location.clone()),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            Ok::<_, DbErr>(created.uid)
        }
        .await;
        settle(txn, outcome).await.map_err(|e| map_write_err(e, PHONE_TAKEN))
    }

    async fn insert_rider(&self, new: NewRider) -> Result<i32, ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::storage)?;
        let outcome = async {
            registry_entry(&new.phone_number, Role::Rider).insert(&txn).await?;
            let created = rider::ActiveModel {
                phone_number: Set(new.phone_number.clone()),
                password: Set(new.password_hash.clone()),
                name: Set(new.name.clone()),
                profile_image: Set(new.profile_image.clone()),
                license_plate: Set(new.license_plate.clone()),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            Ok::<_, DbErr>(created.rid)
        }
        .await;
        settle(txn, outcome).await.map_err(|e| map_write_err(e, PHONE_TAKEN))
    }

    async fn find_user_by_phone(&self, phone: &str) -> Result<Option<UserSummary>, ServiceError> {
        let found = user::Entity::find()
            .filter(user::Column::PhoneNumber.eq(phone))
            .one(&self.db)
            .await
            .map_err(read_err)?;
        Ok(found.map(|u| UserSummary { id: u.uid, name: u.name, phone_number: u.phone_number }))
    }

    async fn user_exists(&self, id: i32) -> Result<bool, ServiceError> {
        let n = user::Entity::find()
            .filter(user::Column::Uid.eq(id))
            .count(&self.db)
            .await
            .map_err(read_err)?;
        Ok(n > 0)
    }

    async fn find_rider(&self, id: i32) -> Result<Option<RiderProfile>, ServiceError> {
        let found = rider::Entity::find_by_id(id).one(&self.db).await.map_err(read_err)?;
        Ok(found.map(|r| RiderProfile { id: r.rid, name: r.name, license_plate: r.license_plate }))
    }
}

use std::sync::Arc;

use common::utils::text::{non_empty, non_empty_opt};
use models::{person, user};
use tracing::{error, info, instrument, warn};

use super::domain::{AuthIdentity, LoginInput, RegisterRiderInput, RegisterUserInput};
use super::password::PasswordService;
use crate::errors::ServiceError;
use crate::person::domain::{NewRider, NewUser};
use crate::person::PersonRepository;

/// Longest licence plate the `riders.license_plate` column accepts.
pub const LICENSE_PLATE_MAX_LEN: usize = 32;

/// Registration and login, independent of the web framework.
pub struct AuthService {
    repo: Arc<dyn PersonRepository>,
    passwords: PasswordService,
}

fn required(value: &str, field: &str) -> Result<String, ServiceError> {
    non_empty(value).ok_or_else(|| ServiceError::Validation(format!("{} is required", field)))
}

impl AuthService {
    pub fn new(repo: Arc<dyn PersonRepository>, passwords: PasswordService) -> Self { Self { repo, passwords } }

    async fn ensure_phone_free(&self, phone: &str) -> Result<(), ServiceError> {
        if self.repo.phone_exists(phone).await? {
            return Err(ServiceError::Conflict("Phone number already registered".into()));
        }
        Ok(())
    }

    /// Register a rider and return its id.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthService, password::PasswordService, domain::RegisterRiderInput};
    /// use service::person::repository::mock::MockPersonRepository;
    /// use std::sync::Arc;
    /// let cfg = configs::AuthConfig { memory_kib: 1024, iterations: 1, parallelism: 1 };
    /// let svc = AuthService::new(Arc::new(MockPersonRepository::default()), PasswordService::new(&cfg).unwrap());
    /// let input = RegisterRiderInput {
    ///     phone_number: "0811111111".into(), password: "p@ss".into(), name: "A".into(),
    ///     profile_image: None, license_plate: "XYZ-1".into(),
    /// };
    /// let id = tokio_test::block_on(svc.register_rider(input)).unwrap();
    /// assert_eq!(id, 1);
    /// ```
    #[instrument(skip(self, input), fields(phone = %input.phone_number.trim()))]
    pub async fn register_rider(&self, input: RegisterRiderInput) -> Result<i32, ServiceError> {
        let phone_number = required(&input.phone_number, "phone_number")?;
        let password = required(&input.password, "password")?;
        let name = required(&input.name, "name")?;
        let license_plate = required(&input.license_plate, "license_plate")?;
        let profile_image = non_empty_opt(input.profile_image.as_deref());
        person::validate_phone(&phone_number)?;
        person::validate_name(&name)?;
        person::validate_optional_len("profile_image", profile_image.as_deref(), person::PROFILE_IMAGE_MAX_LEN)?;
        if license_plate.chars().count() > LICENSE_PLATE_MAX_LEN {
            return Err(ServiceError::Validation(format!(
                "license_plate longer than {} characters",
                LICENSE_PLATE_MAX_LEN
            )));
        }
        self.ensure_phone_free(&phone_number).await?;

        let password_hash = self.passwords.hash(&password).await?;
        let id = self
            .repo
            .insert_rider(NewRider {
                phone_number,
                password_hash,
                name,
                profile_image,
                license_plate,
            })
            .await?;
        info!(rider_id = id, "rider_registered");
        Ok(id)
    }

    /// Register a user (sender or receiver) and return its id.
    #[instrument(skip(self, input), fields(phone = %input.phone_number.trim()))]
    pub async fn register_user(&self, input: RegisterUserInput) -> Result<i32, ServiceError> {
        let phone_number = required(&input.phone_number, "phone_number")?;
        let password = required(&input.password, "password")?;
        let name = required(&input.name, "name")?;
        let address = non_empty_opt(input.address.as_deref());
        let gps_location = non_empty_opt(input.gps_location.as_deref());
        let profile_image = non_empty_opt(input.profile_image.as_deref());
        person::validate_phone(&phone_number)?;
        person::validate_name(&name)?;
        person::validate_optional_len("profile_image", profile_image.as_deref(), person::PROFILE_IMAGE_MAX_LEN)?;
        user::validate_location(address.as_deref(), gps_location.as_deref())?;
        self.ensure_phone_free(&phone_number).await?;

        let password_hash = self.passwords.hash(&password).await?;
        let id = self
            .repo
            .insert_user(NewUser {
                phone_number,
                password_hash,
                name,
                profile_image,
                address,
                gps_location,
            })
            .await?;
        info!(user_id = id, "user_registered");
        Ok(id)
    }

    /// Check a phone/password pair. Every failure past input validation is
    /// `ServiceError::Unauthorized`, whatever the cause.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthService, password::PasswordService, domain::{LoginInput, RegisterUserInput}};
    /// use service::errors::ServiceError;
    /// use service::person::{Role, repository::mock::MockPersonRepository};
    /// use std::sync::Arc;
    /// let cfg = configs::AuthConfig { memory_kib: 1024, iterations: 1, parallelism: 1 };
    /// let svc = AuthService::new(Arc::new(MockPersonRepository::default()), PasswordService::new(&cfg).unwrap());
    /// let _ = tokio_test::block_on(svc.register_user(RegisterUserInput {
    ///     phone_number: "0822222222".into(), password: "secret".into(), name: "B".into(),
    ///     profile_image: None, address: Some("1 Main Rd".into()), gps_location: None,
    /// }));
    /// let who = tokio_test::block_on(svc.login(LoginInput { phone_number: "0822222222".into(), password: "secret".into() })).unwrap();
    /// assert_eq!(who.role, Role::User);
    /// let denied = tokio_test::block_on(svc.login(LoginInput { phone_number: "0822222222".into(), password: "nope".into() }));
    /// assert!(matches!(denied, Err(ServiceError::Unauthorized)));
    /// ```
    #[instrument(skip(self, input), fields(phone = %input.phone_number.trim()))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthIdentity, ServiceError> {
        let (phone, password) = match (non_empty(&input.phone_number), non_empty(&input.password)) {
            (Some(p), Some(pw)) => (p, pw),
            _ => return Err(ServiceError::Validation("phone_number and password are required".into())),
        };

        let creds = match self.repo.find_credentials_by_phone(&phone).await {
            Ok(Some(c)) => c,
            Ok(None) => {
                warn!("login_failed: unknown phone");
                return Err(ServiceError::Unauthorized);
            }
            Err(e) => {
                error!(error = %e, "login_failed: credential lookup error");
                return Err(ServiceError::Unauthorized);
            }
        };

        match self.passwords.verify(&password, &creds.password_hash).await {
            Ok(true) => {
                info!(id = creds.id, role = creds.role.as_str(), "login_succeeded");
                Ok(AuthIdentity { id: creds.id, role: creds.role })
            }
            Ok(false) => {
                warn!(id = creds.id, "login_failed: password mismatch");
                Err(ServiceError::Unauthorized)
            }
            Err(e) => {
                error!(id = creds.id, error = %e, "login_failed: stored hash unusable");
                Err(ServiceError::Unauthorized)
            }
        }
    }
}

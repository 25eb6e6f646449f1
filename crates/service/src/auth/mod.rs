//! Auth module: registration and login for users and riders.
//!
//! Business rules live in [`service::AuthService`]; persistence goes through
//! [`crate::person::PersonRepository`] and hashing through [`password::PasswordService`].

pub mod domain;
pub mod password;
pub mod service;

pub use service::AuthService;

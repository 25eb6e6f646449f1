//! Person storage port: the credential store spanning `users` and `riders`.

pub mod domain;
pub mod repository;
pub mod repo;

pub use domain::Role;
pub use repository::PersonRepository;

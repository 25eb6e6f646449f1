//! Read-only lookups: receiver search by phone and rider profile.

pub mod service;

pub use service::{LookupService, Receiver};

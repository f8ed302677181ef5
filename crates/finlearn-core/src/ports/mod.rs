//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod credentials;
mod repository;

pub use credentials::{CredentialError, CredentialVerifier, PlainTextVerifier};
pub use repository::{
    BlogRepository, CourseRepository, DictionaryRepository, EntityStore, SubscriptionRepository,
    UserRepository,
};

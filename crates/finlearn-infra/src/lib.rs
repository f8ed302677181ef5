//! # FinLearn Infrastructure
//!
//! Concrete implementations of the ports defined in `finlearn-core`.
//! This crate contains the in-memory store, the PostgreSQL store and the
//! credential verifier integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory store only
//! - `postgres` - PostgreSQL store via SeaORM
//! - `argon2` - Argon2 credential hashing

pub mod store;

#[cfg(feature = "postgres")]
pub mod database;

#[cfg(feature = "argon2")]
pub mod credentials;

// Re-exports - In-Memory
pub use store::{
    InMemoryBlogRepository, InMemoryCourseRepository, InMemoryDictionaryRepository,
    InMemorySubscriptionRepository, InMemoryUserRepository,
};

#[cfg(feature = "postgres")]
pub use database::{
    DatabaseConfig, PostgresBlogRepository, PostgresCourseRepository,
    PostgresDictionaryRepository, PostgresSubscriptionRepository, PostgresUserRepository,
};

#[cfg(feature = "argon2")]
pub use credentials::Argon2CredentialVerifier;

//! Database connection management and the PostgreSQL store.

mod connections;

pub mod entity;
pub mod postgres_repo;

pub use connections::{DatabaseConfig, connect};
pub use sea_orm::DbConn;
pub use postgres_repo::{
    PostgresBlogRepository, PostgresCourseRepository, PostgresDictionaryRepository,
    PostgresSubscriptionRepository, PostgresUserRepository,
};

#[cfg(test)]
mod tests;

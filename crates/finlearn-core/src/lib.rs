//! # FinLearn Core
//!
//! The domain layer of the FinLearn backend: entities, store ports, and the
//! query/mutation services. This crate contains pure business logic with
//! zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, StoreError};

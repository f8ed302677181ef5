//! # FinLearn Shared
//!
//! Wire types shared between the backend and any frontend client.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, MessageResponse};

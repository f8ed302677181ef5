//! Data Transfer Objects - request/response payloads for the dedicated
//! actions. Entity bodies (create/update payloads) are the field types from
//! `finlearn_core::domain`; only the action-specific shapes live here.

use finlearn_core::domain::Subscription;
use serde::{Deserialize, Serialize};

/// Request to subscribe an email address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

/// Request to unsubscribe an email address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnsubscribeRequest {
    pub email: String,
}

/// Request to login with mobile number and password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub mobile: String,
    pub password: String,
}

/// Response to a successful subscribe: confirmation plus the stored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeResponse {
    pub message: String,
    pub subscription: Subscription,
}

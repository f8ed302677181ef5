use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subscription entity - a newsletter signup for one email address.
///
/// Lifecycle: created active; unsubscribing flips `is_active` to false and
/// keeps the record (a state transition, not removal). Re-subscribing the
/// same email is rejected as a duplicate while the record exists, in either
/// state; only an explicit delete by id removes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub email: String,
    pub is_active: bool,
    pub subscribed_at: DateTime<Utc>,
}

impl Subscription {
    /// Create an active subscription stamped with the current time. The
    /// store assigns the id.
    pub fn new(email: String) -> Self {
        Self {
            id: String::new(),
            email,
            is_active: true,
            subscribed_at: Utc::now(),
        }
    }
}

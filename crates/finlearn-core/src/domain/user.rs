use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UnknownVariant;

/// Investor profile a user registered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Novice,
    Investor,
    Trader,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Investor => "Investor",
            Self::Trader => "Trader",
        }
    }
}

impl FromStr for UserType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Novice" => Ok(Self::Novice),
            "Investor" => Ok(Self::Investor),
            "Trader" => Ok(Self::Trader),
            other => Err(UnknownVariant::new("user type", other)),
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity - a registered account.
///
/// `password` holds whatever representation the credential verifier
/// produced at registration; with the default plaintext verifier that is
/// the raw password itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub user_type: UserType,
    pub is_active: bool,
    pub registered_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

/// Registration payload: the caller supplies these, the service stamps the
/// rest (active flag, registration and login timestamps).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub user_type: UserType,
}

/// Full-replace update payload for a user. Excludes the password (not
/// updatable through the generic update) along with id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub user_type: UserType,
    pub is_active: bool,
}

impl User {
    /// Create an active user with fresh registration timestamps. `password`
    /// is the stored representation produced by the credential verifier.
    /// The store assigns the id.
    pub fn new(new: NewUser, password: String) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            name: new.name,
            email: new.email,
            mobile: new.mobile,
            password,
            user_type: new.user_type,
            is_active: true,
            registered_at: now,
            last_login: now,
        }
    }

    /// Replace the updatable fields. Password and timestamps are untouched.
    pub fn apply(&mut self, update: UserUpdate) {
        self.name = update.name;
        self.email = update.email;
        self.mobile = update.mobile;
        self.user_type = update.user_type;
        self.is_active = update.is_active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_never_touches_password() {
        let mut user = User::new(
            NewUser {
                name: "Raj".into(),
                email: "raj@example.com".into(),
                mobile: "9000000001".into(),
                password: "secret".into(),
                user_type: UserType::Novice,
            },
            "secret".into(),
        );

        user.apply(UserUpdate {
            name: "Raj S".into(),
            email: "raj@example.com".into(),
            mobile: "9000000001".into(),
            user_type: UserType::Investor,
            is_active: false,
        });

        assert_eq!(user.password, "secret");
        assert_eq!(user.user_type, UserType::Investor);
        assert!(!user.is_active);
    }
}

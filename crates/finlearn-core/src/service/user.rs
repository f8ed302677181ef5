use std::sync::Arc;

use chrono::Utc;

use crate::domain::{NewUser, User, UserType, UserUpdate};
use crate::error::{DomainError, StoreError};
use crate::ports::{CredentialVerifier, UserRepository};

/// Query and mutation operations over the user collection.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { repo, verifier }
    }

    pub async fn all(&self) -> Result<Vec<User>, StoreError> {
        self.repo.find_all().await
    }

    pub async fn by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        self.repo.find_by_id(id).await
    }

    pub async fn by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.repo.find_by_email(email).await
    }

    pub async fn by_mobile(&self, mobile: &str) -> Result<Option<User>, StoreError> {
        self.repo.find_by_mobile(mobile).await
    }

    pub async fn by_type(&self, user_type: UserType) -> Result<Vec<User>, StoreError> {
        self.repo.find_by_user_type(user_type).await
    }

    pub async fn active(&self) -> Result<Vec<User>, StoreError> {
        self.repo.find_by_is_active(true).await
    }

    /// Register a new account. Email then mobile must be unused, in that
    /// order; either collision fails with a duplicate error before any
    /// write. The stored credential is whatever the verifier's `protect`
    /// produces.
    pub async fn register(&self, new: NewUser) -> Result<User, DomainError> {
        if self.repo.exists_by_email(&new.email).await? {
            return Err(DomainError::Duplicate("Email already registered".into()));
        }
        if self.repo.exists_by_mobile(&new.mobile).await? {
            return Err(DomainError::Duplicate(
                "Mobile number already registered".into(),
            ));
        }
        let password = self.verifier.protect(&new.password)?;
        Ok(self.repo.save(User::new(new, password)).await?)
    }

    /// Authenticate by mobile number. On success `last_login` is refreshed
    /// and the updated record returned; an unknown mobile and a failed
    /// check are indistinguishable to the caller. The `is_active` flag is
    /// not consulted.
    pub async fn login(&self, mobile: &str, password: &str) -> Result<User, DomainError> {
        let Some(mut user) = self.repo.find_by_mobile(mobile).await? else {
            return Err(DomainError::InvalidCredentials);
        };
        if !self.verifier.verify(password, &user.password)? {
            return Err(DomainError::InvalidCredentials);
        }
        user.last_login = Utc::now();
        Ok(self.repo.save(user).await?)
    }

    /// Full-replace update of the updatable fields; the password and the
    /// registration timestamp are untouched.
    pub async fn update(&self, id: &str, update: UserUpdate) -> Result<Option<User>, StoreError> {
        let Some(mut user) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        user.apply(update);
        Ok(Some(self.repo.save(user).await?))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        if !self.repo.exists_by_id(id).await? {
            return Ok(false);
        }
        self.repo.delete_by_id(id).await
    }
}

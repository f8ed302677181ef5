use std::sync::Arc;

use crate::domain::Subscription;
use crate::error::{DomainError, StoreError};
use crate::ports::SubscriptionRepository;

/// Query and mutation operations over the subscription collection.
///
/// Subscriptions move through `absent -> active -> inactive`; the inactive
/// record keeps holding the email, so a re-subscribe is rejected as a
/// duplicate until the record is explicitly deleted by id.
#[derive(Clone)]
pub struct SubscriptionService {
    repo: Arc<dyn SubscriptionRepository>,
}

impl SubscriptionService {
    pub fn new(repo: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repo }
    }

    pub async fn all(&self) -> Result<Vec<Subscription>, StoreError> {
        self.repo.find_all().await
    }

    pub async fn by_id(&self, id: &str) -> Result<Option<Subscription>, StoreError> {
        self.repo.find_by_id(id).await
    }

    pub async fn by_email(&self, email: &str) -> Result<Option<Subscription>, StoreError> {
        self.repo.find_by_email(email).await
    }

    pub async fn active(&self) -> Result<Vec<Subscription>, StoreError> {
        self.repo.find_by_is_active(true).await
    }

    /// Subscribe an email address. Fails with a duplicate error when any
    /// record, active or inactive, already holds the email. The existence
    /// check and the write are two store calls; concurrent subscribes for
    /// the same email can both pass the check.
    pub async fn subscribe(&self, email: String) -> Result<Subscription, DomainError> {
        if self.repo.exists_by_email(&email).await? {
            return Err(DomainError::Duplicate("Email already subscribed".into()));
        }
        Ok(self.repo.save(Subscription::new(email)).await?)
    }

    /// Flip an active subscription to inactive. The record and its history
    /// persist; this is a state transition, not removal. Returns false when
    /// the email is unknown, creating nothing.
    pub async fn unsubscribe(&self, email: &str) -> Result<bool, StoreError> {
        let Some(mut subscription) = self.repo.find_by_email(email).await? else {
            return Ok(false);
        };
        subscription.is_active = false;
        self.repo.save(subscription).await?;
        Ok(true)
    }

    /// Hard delete by id, from either state.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        if !self.repo.exists_by_id(id).await? {
            return Ok(false);
        }
        self.repo.delete_by_id(id).await
    }
}

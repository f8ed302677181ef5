use async_trait::async_trait;

use crate::domain::{
    Blog, BlogCategory, Course, CourseCategory, DictionaryTerm, Difficulty, Subscription, User,
    UserType,
};
use crate::error::StoreError;

/// Common contract shared by every entity collection.
///
/// Errors are transient store faults only; a lookup miss is `Ok(None)`, a
/// delete of something absent is `Ok(false)`.
#[async_trait]
pub trait EntityStore<T>: Send + Sync {
    /// Find one record by its opaque id.
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, StoreError>;

    /// Every record, in store iteration order. No ordering is guaranteed.
    async fn find_all(&self) -> Result<Vec<T>, StoreError>;

    /// Persist a record and return the stored copy. An empty id marks a new
    /// record: the store assigns a fresh opaque id before writing.
    async fn save(&self, entity: T) -> Result<T, StoreError>;

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError>;

    /// Delete by id, reporting whether a record was actually removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError>;
}

/// Course collection with its typed finders.
#[async_trait]
pub trait CourseRepository: EntityStore<Course> {
    async fn find_by_category(&self, category: CourseCategory)
    -> Result<Vec<Course>, StoreError>;

    async fn find_by_difficulty(&self, difficulty: Difficulty)
    -> Result<Vec<Course>, StoreError>;

    async fn find_by_is_active(&self, active: bool) -> Result<Vec<Course>, StoreError>;
}

/// Blog collection with its typed finders.
#[async_trait]
pub trait BlogRepository: EntityStore<Blog> {
    async fn find_by_category(&self, category: BlogCategory) -> Result<Vec<Blog>, StoreError>;

    async fn find_by_author(&self, author: &str) -> Result<Vec<Blog>, StoreError>;

    async fn find_by_is_published(&self, published: bool) -> Result<Vec<Blog>, StoreError>;
}

/// Dictionary collection with exact and substring lookups.
#[async_trait]
pub trait DictionaryRepository: EntityStore<DictionaryTerm> {
    /// Exact term match. Returns at most one record; which one is undefined
    /// if the store holds duplicate terms.
    async fn find_by_term(&self, term: &str) -> Result<Option<DictionaryTerm>, StoreError>;

    async fn find_by_category(&self, category: &str) -> Result<Vec<DictionaryTerm>, StoreError>;

    /// Case-insensitive substring match against the term text: "div"
    /// matches "Dividend".
    async fn find_by_term_containing(&self, needle: &str)
    -> Result<Vec<DictionaryTerm>, StoreError>;

    /// Case-insensitive substring match against the definition text.
    async fn find_by_definition_containing(
        &self,
        needle: &str,
    ) -> Result<Vec<DictionaryTerm>, StoreError>;
}

/// Subscription collection keyed by email for the dedup checks.
#[async_trait]
pub trait SubscriptionRepository: EntityStore<Subscription> {
    async fn find_by_email(&self, email: &str) -> Result<Option<Subscription>, StoreError>;

    async fn find_by_is_active(&self, active: bool) -> Result<Vec<Subscription>, StoreError>;

    /// True when any record (active or inactive) holds this email.
    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError>;
}

/// User collection with email/mobile lookups for registration and login.
#[async_trait]
pub trait UserRepository: EntityStore<User> {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_user_type(&self, user_type: UserType) -> Result<Vec<User>, StoreError>;

    async fn find_by_is_active(&self, active: bool) -> Result<Vec<User>, StoreError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError>;

    async fn exists_by_mobile(&self, mobile: &str) -> Result<bool, StoreError>;
}

//! In-memory store implementation - the default backing when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use finlearn_core::domain::{
    Blog, BlogCategory, Course, CourseCategory, DictionaryTerm, Difficulty, Subscription, User,
    UserType,
};
use finlearn_core::error::StoreError;
use finlearn_core::ports::{
    BlogRepository, CourseRepository, DictionaryRepository, EntityStore, SubscriptionRepository,
    UserRepository,
};

/// Record types the memory store can hold. An empty id marks an unsaved record.
trait Keyed {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

impl Keyed for Course {
    fn id(&self) -> &str {
        &self.id
    }
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Keyed for Blog {
    fn id(&self) -> &str {
        &self.id
    }
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Keyed for DictionaryTerm {
    fn id(&self) -> &str {
        &self.id
    }
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Keyed for Subscription {
    fn id(&self) -> &str {
        &self.id
    }
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Keyed for User {
    fn id(&self) -> &str {
        &self.id
    }
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// One entity collection using a simple HashMap with async RwLock.
///
/// Note: Data is lost on process restart.
struct Collection<T> {
    records: RwLock<HashMap<String, T>>,
}

impl<T: Keyed + Clone> Collection<T> {
    fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    async fn get(&self, id: &str) -> Option<T> {
        self.records.read().await.get(id).cloned()
    }

    async fn all(&self) -> Vec<T> {
        self.records.read().await.values().cloned().collect()
    }

    /// Insert or replace, assigning a fresh id when the record has none.
    async fn put(&self, mut entity: T) -> T {
        if entity.id().is_empty() {
            entity.set_id(Uuid::new_v4().to_string());
        }
        let mut records = self.records.write().await;
        records.insert(entity.id().to_string(), entity.clone());
        entity
    }

    async fn contains(&self, id: &str) -> bool {
        self.records.read().await.contains_key(id)
    }

    async fn remove(&self, id: &str) -> bool {
        self.records.write().await.remove(id).is_some()
    }

    async fn find<F>(&self, pred: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.records
            .read()
            .await
            .values()
            .filter(|r| pred(r))
            .cloned()
            .collect()
    }

    async fn find_first<F>(&self, pred: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        self.records.read().await.values().find(|r| pred(r)).cloned()
    }

    async fn any<F>(&self, pred: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        self.records.read().await.values().any(|r| pred(r))
    }
}

/// In-memory course collection.
pub struct InMemoryCourseRepository {
    courses: Collection<Course>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self {
            courses: Collection::new(),
        }
    }
}

impl Default for InMemoryCourseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityStore<Course> for InMemoryCourseRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, StoreError> {
        Ok(self.courses.get(id).await)
    }

    async fn find_all(&self) -> Result<Vec<Course>, StoreError> {
        Ok(self.courses.all().await)
    }

    async fn save(&self, entity: Course) -> Result<Course, StoreError> {
        Ok(self.courses.put(entity).await)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.courses.contains(id).await)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.courses.remove(id).await)
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_by_category(
        &self,
        category: CourseCategory,
    ) -> Result<Vec<Course>, StoreError> {
        Ok(self.courses.find(|c| c.category == category).await)
    }

    async fn find_by_difficulty(
        &self,
        difficulty: Difficulty,
    ) -> Result<Vec<Course>, StoreError> {
        Ok(self.courses.find(|c| c.difficulty == difficulty).await)
    }

    async fn find_by_is_active(&self, active: bool) -> Result<Vec<Course>, StoreError> {
        Ok(self.courses.find(|c| c.is_active == active).await)
    }
}

/// In-memory blog collection.
pub struct InMemoryBlogRepository {
    blogs: Collection<Blog>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            blogs: Collection::new(),
        }
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityStore<Blog> for InMemoryBlogRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Blog>, StoreError> {
        Ok(self.blogs.get(id).await)
    }

    async fn find_all(&self) -> Result<Vec<Blog>, StoreError> {
        Ok(self.blogs.all().await)
    }

    async fn save(&self, entity: Blog) -> Result<Blog, StoreError> {
        Ok(self.blogs.put(entity).await)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.blogs.contains(id).await)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.blogs.remove(id).await)
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_by_category(&self, category: BlogCategory) -> Result<Vec<Blog>, StoreError> {
        Ok(self.blogs.find(|b| b.category == category).await)
    }

    async fn find_by_author(&self, author: &str) -> Result<Vec<Blog>, StoreError> {
        Ok(self.blogs.find(|b| b.author == author).await)
    }

    async fn find_by_is_published(&self, published: bool) -> Result<Vec<Blog>, StoreError> {
        Ok(self.blogs.find(|b| b.is_published == published).await)
    }
}

/// In-memory dictionary collection.
pub struct InMemoryDictionaryRepository {
    terms: Collection<DictionaryTerm>,
}

impl InMemoryDictionaryRepository {
    pub fn new() -> Self {
        Self {
            terms: Collection::new(),
        }
    }
}

impl Default for InMemoryDictionaryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityStore<DictionaryTerm> for InMemoryDictionaryRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<DictionaryTerm>, StoreError> {
        Ok(self.terms.get(id).await)
    }

    async fn find_all(&self) -> Result<Vec<DictionaryTerm>, StoreError> {
        Ok(self.terms.all().await)
    }

    async fn save(&self, entity: DictionaryTerm) -> Result<DictionaryTerm, StoreError> {
        Ok(self.terms.put(entity).await)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.terms.contains(id).await)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.terms.remove(id).await)
    }
}

#[async_trait]
impl DictionaryRepository for InMemoryDictionaryRepository {
    async fn find_by_term(&self, term: &str) -> Result<Option<DictionaryTerm>, StoreError> {
        Ok(self.terms.find_first(|t| t.term == term).await)
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<DictionaryTerm>, StoreError> {
        Ok(self.terms.find(|t| t.category == category).await)
    }

    async fn find_by_term_containing(
        &self,
        needle: &str,
    ) -> Result<Vec<DictionaryTerm>, StoreError> {
        let needle = needle.to_lowercase();
        Ok(self
            .terms
            .find(|t| t.term.to_lowercase().contains(&needle))
            .await)
    }

    async fn find_by_definition_containing(
        &self,
        needle: &str,
    ) -> Result<Vec<DictionaryTerm>, StoreError> {
        let needle = needle.to_lowercase();
        Ok(self
            .terms
            .find(|t| t.definition.to_lowercase().contains(&needle))
            .await)
    }
}

/// In-memory subscription collection.
pub struct InMemorySubscriptionRepository {
    subscriptions: Collection<Subscription>,
}

impl InMemorySubscriptionRepository {
    pub fn new() -> Self {
        Self {
            subscriptions: Collection::new(),
        }
    }
}

impl Default for InMemorySubscriptionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityStore<Subscription> for InMemorySubscriptionRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Subscription>, StoreError> {
        Ok(self.subscriptions.get(id).await)
    }

    async fn find_all(&self) -> Result<Vec<Subscription>, StoreError> {
        Ok(self.subscriptions.all().await)
    }

    async fn save(&self, entity: Subscription) -> Result<Subscription, StoreError> {
        Ok(self.subscriptions.put(entity).await)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.subscriptions.contains(id).await)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.subscriptions.remove(id).await)
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Subscription>, StoreError> {
        Ok(self.subscriptions.find_first(|s| s.email == email).await)
    }

    async fn find_by_is_active(&self, active: bool) -> Result<Vec<Subscription>, StoreError> {
        Ok(self.subscriptions.find(|s| s.is_active == active).await)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.subscriptions.any(|s| s.email == email).await)
    }
}

/// In-memory user collection.
pub struct InMemoryUserRepository {
    users: Collection<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Collection::new(),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityStore<User> for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.get(id).await)
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.all().await)
    }

    async fn save(&self, entity: User) -> Result<User, StoreError> {
        Ok(self.users.put(entity).await)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.users.contains(id).await)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.users.remove(id).await)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.find_first(|u| u.email == email).await)
    }

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.find_first(|u| u.mobile == mobile).await)
    }

    async fn find_by_user_type(&self, user_type: UserType) -> Result<Vec<User>, StoreError> {
        Ok(self.users.find(|u| u.user_type == user_type).await)
    }

    async fn find_by_is_active(&self, active: bool) -> Result<Vec<User>, StoreError> {
        Ok(self.users.find(|u| u.is_active == active).await)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.users.any(|u| u.email == email).await)
    }

    async fn exists_by_mobile(&self, mobile: &str) -> Result<bool, StoreError> {
        Ok(self.users.any(|u| u.mobile == mobile).await)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use finlearn_core::domain::CourseFields;

    use super::*;

    fn sample_course(title: &str) -> Course {
        Course::new(CourseFields {
            title: title.to_string(),
            description: "A course".to_string(),
            category: CourseCategory::Novice,
            image_url: "https://example.com/c.png".to_string(),
            difficulty: Difficulty::Beginner,
            duration: NonZeroU32::new(4).unwrap(),
            is_active: true,
        })
    }

    #[tokio::test]
    async fn test_save_assigns_id_once() {
        let repo = InMemoryCourseRepository::new();

        let saved = repo.save(sample_course("Options 101")).await.unwrap();
        assert!(!saved.id.is_empty());

        let resaved = repo.save(saved.clone()).await.unwrap();
        assert_eq!(resaved.id, saved.id);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_id_miss_is_none() {
        let repo = InMemoryCourseRepository::new();
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_removal() {
        let repo = InMemoryCourseRepository::new();
        let saved = repo.save(sample_course("Options 101")).await.unwrap();

        assert!(repo.delete_by_id(&saved.id).await.unwrap());
        assert!(!repo.delete_by_id(&saved.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_typed_finders_filter() {
        let repo = InMemoryCourseRepository::new();
        let mut inactive = sample_course("Dormant");
        inactive.is_active = false;
        repo.save(sample_course("Options 101")).await.unwrap();
        repo.save(inactive).await.unwrap();

        let active = repo.find_by_is_active(true).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "Options 101");

        let novice = repo
            .find_by_category(CourseCategory::Novice)
            .await
            .unwrap();
        assert_eq!(novice.len(), 2);
    }
}

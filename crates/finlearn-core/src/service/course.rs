use std::sync::Arc;

use crate::domain::{Course, CourseCategory, CourseFields, Difficulty};
use crate::error::StoreError;
use crate::ports::CourseRepository;

/// Query and mutation operations over the course collection.
///
/// The store handle is injected at construction; the service keeps no other
/// state and re-reads current records before every mutation.
#[derive(Clone)]
pub struct CourseService {
    repo: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(repo: Arc<dyn CourseRepository>) -> Self {
        Self { repo }
    }

    pub async fn all(&self) -> Result<Vec<Course>, StoreError> {
        self.repo.find_all().await
    }

    /// Lookup by id. A miss is `None`, never an error.
    pub async fn by_id(&self, id: &str) -> Result<Option<Course>, StoreError> {
        self.repo.find_by_id(id).await
    }

    pub async fn by_category(&self, category: CourseCategory) -> Result<Vec<Course>, StoreError> {
        self.repo.find_by_category(category).await
    }

    pub async fn by_difficulty(&self, difficulty: Difficulty) -> Result<Vec<Course>, StoreError> {
        self.repo.find_by_difficulty(difficulty).await
    }

    /// Courses whose `is_active` flag is set.
    pub async fn active(&self) -> Result<Vec<Course>, StoreError> {
        self.repo.find_by_is_active(true).await
    }

    /// Create a course; `created_at`/`updated_at` are stamped here and the
    /// store assigns the id.
    pub async fn create(&self, fields: CourseFields) -> Result<Course, StoreError> {
        self.repo.save(Course::new(fields)).await
    }

    /// Full-replace update. Returns `None` when the id is unknown, leaving
    /// the caller to map that to its not-found signal. The id and
    /// `created_at` survive; `updated_at` is refreshed.
    pub async fn update(
        &self,
        id: &str,
        fields: CourseFields,
    ) -> Result<Option<Course>, StoreError> {
        let Some(mut course) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        course.apply(fields);
        Ok(Some(self.repo.save(course).await?))
    }

    /// Hard delete. The first call on an existing id returns true; any call
    /// on an unknown id returns false.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        if !self.repo.exists_by_id(id).await? {
            return Ok(false);
        }
        self.repo.delete_by_id(id).await
    }
}

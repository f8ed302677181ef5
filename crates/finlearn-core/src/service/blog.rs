use std::sync::Arc;

use crate::domain::{Blog, BlogCategory, BlogFields};
use crate::error::StoreError;
use crate::ports::BlogRepository;

/// Query and mutation operations over the blog collection.
#[derive(Clone)]
pub struct BlogService {
    repo: Arc<dyn BlogRepository>,
}

impl BlogService {
    pub fn new(repo: Arc<dyn BlogRepository>) -> Self {
        Self { repo }
    }

    pub async fn all(&self) -> Result<Vec<Blog>, StoreError> {
        self.repo.find_all().await
    }

    pub async fn by_id(&self, id: &str) -> Result<Option<Blog>, StoreError> {
        self.repo.find_by_id(id).await
    }

    pub async fn by_category(&self, category: BlogCategory) -> Result<Vec<Blog>, StoreError> {
        self.repo.find_by_category(category).await
    }

    pub async fn by_author(&self, author: &str) -> Result<Vec<Blog>, StoreError> {
        self.repo.find_by_author(author).await
    }

    pub async fn published(&self) -> Result<Vec<Blog>, StoreError> {
        self.repo.find_by_is_published(true).await
    }

    pub async fn create(&self, fields: BlogFields) -> Result<Blog, StoreError> {
        self.repo.save(Blog::new(fields)).await
    }

    pub async fn update(&self, id: &str, fields: BlogFields) -> Result<Option<Blog>, StoreError> {
        let Some(mut blog) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        blog.apply(fields);
        Ok(Some(self.repo.save(blog).await?))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        if !self.repo.exists_by_id(id).await? {
            return Ok(false);
        }
        self.repo.delete_by_id(id).await
    }
}

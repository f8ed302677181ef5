use std::sync::Arc;

use crate::domain::{DictionaryTerm, TermFields};
use crate::error::StoreError;
use crate::ports::DictionaryRepository;

/// Query and mutation operations over the dictionary collection.
#[derive(Clone)]
pub struct DictionaryService {
    repo: Arc<dyn DictionaryRepository>,
}

impl DictionaryService {
    pub fn new(repo: Arc<dyn DictionaryRepository>) -> Self {
        Self { repo }
    }

    pub async fn all(&self) -> Result<Vec<DictionaryTerm>, StoreError> {
        self.repo.find_all().await
    }

    pub async fn by_id(&self, id: &str) -> Result<Option<DictionaryTerm>, StoreError> {
        self.repo.find_by_id(id).await
    }

    /// Exact-term lookup; at most one match. Which record wins is undefined
    /// if the store holds duplicate terms.
    pub async fn by_term(&self, term: &str) -> Result<Option<DictionaryTerm>, StoreError> {
        self.repo.find_by_term(term).await
    }

    pub async fn by_category(&self, category: &str) -> Result<Vec<DictionaryTerm>, StoreError> {
        self.repo.find_by_category(category).await
    }

    /// Case-insensitive substring search over the term text: "div" matches
    /// "Dividend".
    pub async fn search(&self, needle: &str) -> Result<Vec<DictionaryTerm>, StoreError> {
        self.repo.find_by_term_containing(needle).await
    }

    /// Case-insensitive substring search over definitions.
    pub async fn search_definitions(
        &self,
        needle: &str,
    ) -> Result<Vec<DictionaryTerm>, StoreError> {
        self.repo.find_by_definition_containing(needle).await
    }

    /// Create a term. Term uniqueness is not enforced; see `by_term` for
    /// the consequence.
    pub async fn create(&self, fields: TermFields) -> Result<DictionaryTerm, StoreError> {
        self.repo.save(DictionaryTerm::new(fields)).await
    }

    pub async fn update(
        &self,
        id: &str,
        fields: TermFields,
    ) -> Result<Option<DictionaryTerm>, StoreError> {
        let Some(mut term) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        term.apply(fields);
        Ok(Some(self.repo.save(term).await?))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        if !self.repo.exists_by_id(id).await? {
            return Ok(false);
        }
        self.repo.delete_by_id(id).await
    }
}

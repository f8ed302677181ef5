use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dictionary entry - a glossary term with its definition.
///
/// Terms carry no status flag; every stored term is visible. The term text
/// is expected to be unique in practice but the store does not enforce it:
/// exact-term lookup returns an arbitrary match if duplicates exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryTerm {
    pub id: String,
    pub term: String,
    pub definition: String,
    /// Free-text grouping ("Stock Market", "Fundamental Analysis", ...).
    pub category: String,
    pub example: String,
    pub related_terms: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The business fields of a dictionary term, minus id and audit timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermFields {
    pub term: String,
    pub definition: String,
    pub category: String,
    pub example: String,
    pub related_terms: String,
}

impl DictionaryTerm {
    /// Create a new term with fresh timestamps. The store assigns the id.
    pub fn new(fields: TermFields) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            term: fields.term,
            definition: fields.definition,
            category: fields.category,
            example: fields.example,
            related_terms: fields.related_terms,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field and refresh `updated_at`.
    pub fn apply(&mut self, fields: TermFields) {
        self.term = fields.term;
        self.definition = fields.definition;
        self.category = fields.category;
        self.example = fields.example;
        self.related_terms = fields.related_terms;
        self.updated_at = Utc::now();
    }
}

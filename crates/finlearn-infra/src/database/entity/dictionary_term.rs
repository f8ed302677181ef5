//! Dictionary term entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use finlearn_core::domain::DictionaryTerm;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dictionary_terms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub term: String,
    pub definition: String,
    pub category: String,
    pub example: String,
    pub related_terms: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for DictionaryTerm {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            term: model.term,
            definition: model.definition,
            category: model.category,
            example: model.example,
            related_terms: model.related_terms,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<DictionaryTerm> for ActiveModel {
    fn from(term: DictionaryTerm) -> Self {
        Self {
            id: Set(term.id),
            term: Set(term.term),
            definition: Set(term.definition),
            category: Set(term.category),
            example: Set(term.example),
            related_terms: Set(term.related_terms),
            created_at: Set(term.created_at.into()),
            updated_at: Set(term.updated_at.into()),
        }
    }
}

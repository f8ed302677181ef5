//! Course entity for SeaORM.

use std::num::NonZeroU32;

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use finlearn_core::domain::{Course, CourseCategory, Difficulty};
use finlearn_core::error::StoreError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub difficulty: String,
    pub duration: i32,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain Course. Fails when a stored
/// row carries a category, difficulty or duration outside the domain.
impl TryFrom<Model> for Course {
    type Error = StoreError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let category = model
            .category
            .parse::<CourseCategory>()
            .map_err(|e| StoreError::Query(e.to_string()))?;
        let difficulty = model
            .difficulty
            .parse::<Difficulty>()
            .map_err(|e| StoreError::Query(e.to_string()))?;
        let duration = u32::try_from(model.duration)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| {
                StoreError::Query(format!(
                    "course {} has invalid duration {}",
                    model.id, model.duration
                ))
            })?;

        Ok(Self {
            id: model.id,
            title: model.title,
            description: model.description,
            category,
            image_url: model.image_url,
            difficulty,
            duration,
            is_active: model.is_active,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}

/// Conversion from the domain Course to a fully-set ActiveModel.
impl From<Course> for ActiveModel {
    fn from(course: Course) -> Self {
        Self {
            id: Set(course.id),
            title: Set(course.title),
            description: Set(course.description),
            category: Set(course.category.as_str().to_string()),
            image_url: Set(course.image_url),
            difficulty: Set(course.difficulty.as_str().to_string()),
            duration: Set(course.duration.get() as i32),
            is_active: Set(course.is_active),
            created_at: Set(course.created_at.into()),
            updated_at: Set(course.updated_at.into()),
        }
    }
}

//! Blog entity for SeaORM.

use std::num::NonZeroU32;

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use finlearn_core::domain::{Blog, BlogCategory};
use finlearn_core::error::StoreError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub author: String,
    pub image_url: String,
    pub summary: String,
    pub read_time: i32,
    pub is_published: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Blog {
    type Error = StoreError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let category = model
            .category
            .parse::<BlogCategory>()
            .map_err(|e| StoreError::Query(e.to_string()))?;
        let read_time = u32::try_from(model.read_time)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| {
                StoreError::Query(format!(
                    "blog {} has invalid read time {}",
                    model.id, model.read_time
                ))
            })?;

        Ok(Self {
            id: model.id,
            title: model.title,
            content: model.content,
            category,
            author: model.author,
            image_url: model.image_url,
            summary: model.summary,
            read_time,
            is_published: model.is_published,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}

impl From<Blog> for ActiveModel {
    fn from(blog: Blog) -> Self {
        Self {
            id: Set(blog.id),
            title: Set(blog.title),
            content: Set(blog.content),
            category: Set(blog.category.as_str().to_string()),
            author: Set(blog.author),
            image_url: Set(blog.image_url),
            summary: Set(blog.summary),
            read_time: Set(blog.read_time.get() as i32),
            is_published: Set(blog.is_published),
            created_at: Set(blog.created_at.into()),
            updated_at: Set(blog.updated_at.into()),
        }
    }
}

//! User entity for SeaORM.
//!
//! Email and mobile carry no unique indexes; registration dedup is a
//! service-level existence check.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use finlearn_core::domain::{User, UserType};
use finlearn_core::error::StoreError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub user_type: String,
    pub is_active: bool,
    pub registered_at: DateTimeWithTimeZone,
    pub last_login: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for User {
    type Error = StoreError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let user_type = model
            .user_type
            .parse::<UserType>()
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(Self {
            id: model.id,
            name: model.name,
            email: model.email,
            mobile: model.mobile,
            password: model.password,
            user_type,
            is_active: model.is_active,
            registered_at: model.registered_at.into(),
            last_login: model.last_login.into(),
        })
    }
}

impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        Self {
            id: Set(user.id),
            name: Set(user.name),
            email: Set(user.email),
            mobile: Set(user.mobile),
            password: Set(user.password),
            user_type: Set(user.user_type.as_str().to_string()),
            is_active: Set(user.is_active),
            registered_at: Set(user.registered_at.into()),
            last_login: Set(user.last_login.into()),
        }
    }
}

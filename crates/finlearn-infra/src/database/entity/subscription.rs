//! Subscription entity for SeaORM.
//!
//! The email column deliberately carries no unique index; duplicate
//! prevention is a service-level existence check.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use finlearn_core::domain::Subscription;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "subscriptions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub email: String,
    pub is_active: bool,
    pub subscribed_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Subscription {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            is_active: model.is_active,
            subscribed_at: model.subscribed_at.into(),
        }
    }
}

impl From<Subscription> for ActiveModel {
    fn from(subscription: Subscription) -> Self {
        Self {
            id: Set(subscription.id),
            email: Set(subscription.email),
            is_active: Set(subscription.is_active),
            subscribed_at: Set(subscription.subscribed_at.into()),
        }
    }
}

//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter};
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

use super::entity::blog::{self, Entity as BlogEntity};
use super::entity::course::{self, Entity as CourseEntity};
use super::entity::dictionary_term::{self, Entity as DictionaryTermEntity};
use super::entity::subscription::{self, Entity as SubscriptionEntity};
use super::entity::user::{self, Entity as UserEntity};

fn store_err(err: DbErr) -> StoreError {
    match err {
        DbErr::Conn(e) => StoreError::Unavailable(e.to_string()),
        DbErr::ConnectionAcquire(e) => StoreError::Unavailable(e.to_string()),
        other => StoreError::Query(other.to_string()),
    }
}

/// SQL LIKE pattern for a case-insensitive substring match.
fn contains_pattern(needle: &str) -> String {
    format!("%{}%", needle.to_lowercase())
}

// Mask email for logging to avoid PII in logs
fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        let masked_local = if local.len() > 1 {
            format!("{}***", &local[..1])
        } else {
            "***".to_string()
        };
        format!("{masked_local}{domain}")
    } else {
        "***".to_string()
    }
}

fn mask_mobile(mobile: &str) -> String {
    if mobile.len() > 4 {
        format!("***{}", &mobile[mobile.len() - 4..])
    } else {
        "***".to_string()
    }
}

/// PostgreSQL course repository.
pub struct PostgresCourseRepository {
    db: DbConn,
}

impl PostgresCourseRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityStore<Course> for PostgresCourseRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, StoreError> {
        let row = CourseEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(store_err)?;
        row.map(Course::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Course>, StoreError> {
        let rows = CourseEntity::find().all(&self.db).await.map_err(store_err)?;
        rows.into_iter().map(Course::try_from).collect()
    }

    async fn save(&self, mut entity: Course) -> Result<Course, StoreError> {
        let fresh = entity.id.is_empty();
        if fresh {
            entity.id = Uuid::new_v4().to_string();
        }
        let active: course::ActiveModel = entity.into();
        let model = if fresh {
            active.insert(&self.db).await
        } else {
            active.update(&self.db).await
        }
        .map_err(store_err)?;
        Course::try_from(model)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let row = CourseEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(store_err)?;
        Ok(row.is_some())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let result = CourseEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(store_err)?;
        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
    async fn find_by_category(
        &self,
        category: CourseCategory,
    ) -> Result<Vec<Course>, StoreError> {
        let rows = CourseEntity::find()
            .filter(course::Column::Category.eq(category.as_str()))
            .all(&self.db)
            .await
            .map_err(store_err)?;
        rows.into_iter().map(Course::try_from).collect()
    }

    async fn find_by_difficulty(
        &self,
        difficulty: Difficulty,
    ) -> Result<Vec<Course>, StoreError> {
        let rows = CourseEntity::find()
            .filter(course::Column::Difficulty.eq(difficulty.as_str()))
            .all(&self.db)
            .await
            .map_err(store_err)?;
        rows.into_iter().map(Course::try_from).collect()
    }

    async fn find_by_is_active(&self, active: bool) -> Result<Vec<Course>, StoreError> {
        let rows = CourseEntity::find()
            .filter(course::Column::IsActive.eq(active))
            .all(&self.db)
            .await
            .map_err(store_err)?;
        rows.into_iter().map(Course::try_from).collect()
    }
}

/// PostgreSQL blog repository.
pub struct PostgresBlogRepository {
    db: DbConn,
}

impl PostgresBlogRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityStore<Blog> for PostgresBlogRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Blog>, StoreError> {
        let row = BlogEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(store_err)?;
        row.map(Blog::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Blog>, StoreError> {
        let rows = BlogEntity::find().all(&self.db).await.map_err(store_err)?;
        rows.into_iter().map(Blog::try_from).collect()
    }

    async fn save(&self, mut entity: Blog) -> Result<Blog, StoreError> {
        let fresh = entity.id.is_empty();
        if fresh {
            entity.id = Uuid::new_v4().to_string();
        }
        let active: blog::ActiveModel = entity.into();
        let model = if fresh {
            active.insert(&self.db).await
        } else {
            active.update(&self.db).await
        }
        .map_err(store_err)?;
        Blog::try_from(model)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let row = BlogEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(store_err)?;
        Ok(row.is_some())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let result = BlogEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(store_err)?;
        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn find_by_category(&self, category: BlogCategory) -> Result<Vec<Blog>, StoreError> {
        let rows = BlogEntity::find()
            .filter(blog::Column::Category.eq(category.as_str()))
            .all(&self.db)
            .await
            .map_err(store_err)?;
        rows.into_iter().map(Blog::try_from).collect()
    }

    async fn find_by_author(&self, author: &str) -> Result<Vec<Blog>, StoreError> {
        let rows = BlogEntity::find()
            .filter(blog::Column::Author.eq(author))
            .all(&self.db)
            .await
            .map_err(store_err)?;
        rows.into_iter().map(Blog::try_from).collect()
    }

    async fn find_by_is_published(&self, published: bool) -> Result<Vec<Blog>, StoreError> {
        let rows = BlogEntity::find()
            .filter(blog::Column::IsPublished.eq(published))
            .all(&self.db)
            .await
            .map_err(store_err)?;
        rows.into_iter().map(Blog::try_from).collect()
    }
}

/// PostgreSQL dictionary repository.
pub struct PostgresDictionaryRepository {
    db: DbConn,
}

impl PostgresDictionaryRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityStore<DictionaryTerm> for PostgresDictionaryRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<DictionaryTerm>, StoreError> {
        let row = DictionaryTermEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(store_err)?;
        Ok(row.map(DictionaryTerm::from))
    }

    async fn find_all(&self) -> Result<Vec<DictionaryTerm>, StoreError> {
        let rows = DictionaryTermEntity::find()
            .all(&self.db)
            .await
            .map_err(store_err)?;
        Ok(rows.into_iter().map(DictionaryTerm::from).collect())
    }

    async fn save(&self, mut entity: DictionaryTerm) -> Result<DictionaryTerm, StoreError> {
        let fresh = entity.id.is_empty();
        if fresh {
            entity.id = Uuid::new_v4().to_string();
        }
        let active: dictionary_term::ActiveModel = entity.into();
        let model = if fresh {
            active.insert(&self.db).await
        } else {
            active.update(&self.db).await
        }
        .map_err(store_err)?;
        Ok(model.into())
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let row = DictionaryTermEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(store_err)?;
        Ok(row.is_some())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let result = DictionaryTermEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(store_err)?;
        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl DictionaryRepository for PostgresDictionaryRepository {
    async fn find_by_term(&self, term: &str) -> Result<Option<DictionaryTerm>, StoreError> {
        let row = DictionaryTermEntity::find()
            .filter(dictionary_term::Column::Term.eq(term))
            .one(&self.db)
            .await
            .map_err(store_err)?;
        Ok(row.map(DictionaryTerm::from))
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<DictionaryTerm>, StoreError> {
        let rows = DictionaryTermEntity::find()
            .filter(dictionary_term::Column::Category.eq(category))
            .all(&self.db)
            .await
            .map_err(store_err)?;
        Ok(rows.into_iter().map(DictionaryTerm::from).collect())
    }

    async fn find_by_term_containing(
        &self,
        needle: &str,
    ) -> Result<Vec<DictionaryTerm>, StoreError> {
        let rows = DictionaryTermEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(dictionary_term::Column::Term)))
                    .like(contains_pattern(needle)),
            )
            .all(&self.db)
            .await
            .map_err(store_err)?;
        Ok(rows.into_iter().map(DictionaryTerm::from).collect())
    }

    async fn find_by_definition_containing(
        &self,
        needle: &str,
    ) -> Result<Vec<DictionaryTerm>, StoreError> {
        let rows = DictionaryTermEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(dictionary_term::Column::Definition)))
                    .like(contains_pattern(needle)),
            )
            .all(&self.db)
            .await
            .map_err(store_err)?;
        Ok(rows.into_iter().map(DictionaryTerm::from).collect())
    }
}

/// PostgreSQL subscription repository.
pub struct PostgresSubscriptionRepository {
    db: DbConn,
}

impl PostgresSubscriptionRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityStore<Subscription> for PostgresSubscriptionRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Subscription>, StoreError> {
        let row = SubscriptionEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(store_err)?;
        Ok(row.map(Subscription::from))
    }

    async fn find_all(&self) -> Result<Vec<Subscription>, StoreError> {
        let rows = SubscriptionEntity::find()
            .all(&self.db)
            .await
            .map_err(store_err)?;
        Ok(rows.into_iter().map(Subscription::from).collect())
    }

    async fn save(&self, mut entity: Subscription) -> Result<Subscription, StoreError> {
        let fresh = entity.id.is_empty();
        if fresh {
            entity.id = Uuid::new_v4().to_string();
        }
        let active: subscription::ActiveModel = entity.into();
        let model = if fresh {
            active.insert(&self.db).await
        } else {
            active.update(&self.db).await
        }
        .map_err(store_err)?;
        Ok(model.into())
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let row = SubscriptionEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(store_err)?;
        Ok(row.is_some())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let result = SubscriptionEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(store_err)?;
        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Subscription>, StoreError> {
        let row = SubscriptionEntity::find()
            .filter(subscription::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(store_err)?;
        Ok(row.map(Subscription::from))
    }

    async fn find_by_is_active(&self, active: bool) -> Result<Vec<Subscription>, StoreError> {
        let rows = SubscriptionEntity::find()
            .filter(subscription::Column::IsActive.eq(active))
            .all(&self.db)
            .await
            .map_err(store_err)?;
        Ok(rows.into_iter().map(Subscription::from).collect())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        let row = SubscriptionEntity::find()
            .filter(subscription::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(store_err)?;
        Ok(row.is_some())
    }
}

/// PostgreSQL user repository.
pub struct PostgresUserRepository {
    db: DbConn,
}

impl PostgresUserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityStore<User> for PostgresUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let row = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(store_err)?;
        row.map(User::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let rows = UserEntity::find().all(&self.db).await.map_err(store_err)?;
        rows.into_iter().map(User::try_from).collect()
    }

    async fn save(&self, mut entity: User) -> Result<User, StoreError> {
        let fresh = entity.id.is_empty();
        if fresh {
            entity.id = Uuid::new_v4().to_string();
        }
        let active: user::ActiveModel = entity.into();
        let model = if fresh {
            active.insert(&self.db).await
        } else {
            active.update(&self.db).await
        }
        .map_err(store_err)?;
        User::try_from(model)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let row = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(store_err)?;
        Ok(row.is_some())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(store_err)?;
        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let row = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(store_err)?;
        row.map(User::try_from).transpose()
    }

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, StoreError> {
        tracing::debug!(user_mobile = %mask_mobile(mobile), "Finding user by mobile");

        let row = UserEntity::find()
            .filter(user::Column::Mobile.eq(mobile))
            .one(&self.db)
            .await
            .map_err(store_err)?;
        row.map(User::try_from).transpose()
    }

    async fn find_by_user_type(&self, user_type: UserType) -> Result<Vec<User>, StoreError> {
        let rows = UserEntity::find()
            .filter(user::Column::UserType.eq(user_type.as_str()))
            .all(&self.db)
            .await
            .map_err(store_err)?;
        rows.into_iter().map(User::try_from).collect()
    }

    async fn find_by_is_active(&self, active: bool) -> Result<Vec<User>, StoreError> {
        let rows = UserEntity::find()
            .filter(user::Column::IsActive.eq(active))
            .all(&self.db)
            .await
            .map_err(store_err)?;
        rows.into_iter().map(User::try_from).collect()
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        let row = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(store_err)?;
        Ok(row.is_some())
    }

    async fn exists_by_mobile(&self, mobile: &str) -> Result<bool, StoreError> {
        let row = UserEntity::find()
            .filter(user::Column::Mobile.eq(mobile))
            .one(&self.db)
            .await
            .map_err(store_err)?;
        Ok(row.is_some())
    }
}

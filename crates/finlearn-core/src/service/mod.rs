//! Query and mutation services - one per entity type.
//!
//! Each service owns an injected store handle (`Arc<dyn ...Repository>`)
//! and enforces the create-time uniqueness and timestamp rules before
//! delegating to the store. Nothing here caches records across calls.

mod blog;
mod course;
mod dictionary;
mod subscription;
mod user;

pub use blog::BlogService;
pub use course::CourseService;
pub use dictionary::DictionaryService;
pub use subscription::SubscriptionService;
pub use user::UserService;

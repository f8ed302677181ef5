//! Domain entities - the five stored record types and their taxonomies.

use thiserror::Error;

mod blog;
mod course;
mod dictionary;
mod subscription;
mod user;

pub use blog::{Blog, BlogCategory, BlogFields};
pub use course::{Course, CourseCategory, CourseFields, Difficulty};
pub use dictionary::{DictionaryTerm, TermFields};
pub use subscription::Subscription;
pub use user::{NewUser, User, UserType, UserUpdate};

/// Parse failure for one of the closed category/difficulty/type sets.
#[derive(Debug, Clone, Error)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

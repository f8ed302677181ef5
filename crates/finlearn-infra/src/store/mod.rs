//! Entity store implementations.

mod memory;

pub use memory::{
    InMemoryBlogRepository, InMemoryCourseRepository, InMemoryDictionaryRepository,
    InMemorySubscriptionRepository, InMemoryUserRepository,
};

#[cfg(test)]
mod tests;

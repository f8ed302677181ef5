//! Application state - shared across all handlers.

use std::sync::Arc;

use finlearn_core::ports::{CredentialVerifier, PlainTextVerifier};
use finlearn_core::service::{
    BlogService, CourseService, DictionaryService, SubscriptionService, UserService,
};
use finlearn_infra::store::{
    InMemoryBlogRepository, InMemoryCourseRepository, InMemoryDictionaryRepository,
    InMemorySubscriptionRepository, InMemoryUserRepository,
};

#[cfg(feature = "argon2")]
use finlearn_infra::credentials::Argon2CredentialVerifier;

#[cfg(feature = "postgres")]
use finlearn_infra::database::{
    self, DbConn, PostgresBlogRepository, PostgresCourseRepository, PostgresDictionaryRepository,
    PostgresSubscriptionRepository, PostgresUserRepository,
};

use crate::config::AppConfig;

/// Shared application state: one service per entity collection, each holding
/// its injected store handle.
#[derive(Clone)]
pub struct AppState {
    pub courses: CourseService,
    pub blogs: BlogService,
    pub dictionary: DictionaryService,
    pub subscriptions: SubscriptionService,
    pub users: UserService,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let verifier = credential_verifier(config);

        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                match database::connect(db_config).await {
                    Ok(conn) => {
                        tracing::info!("Using the PostgreSQL store");
                        return Self::with_postgres(conn, verifier);
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using the in-memory store.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running with the in-memory store.");
            }
        }

        #[cfg(not(feature = "postgres"))]
        if config.database.is_some() {
            tracing::warn!(
                "DATABASE_URL set but the postgres feature is disabled. Using the in-memory store."
            );
        }

        tracing::info!("Application state initialized (in-memory store)");
        Self::with_memory(verifier)
    }

    /// All five services over fresh in-memory collections.
    pub fn with_memory(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            courses: CourseService::new(Arc::new(InMemoryCourseRepository::new())),
            blogs: BlogService::new(Arc::new(InMemoryBlogRepository::new())),
            dictionary: DictionaryService::new(Arc::new(InMemoryDictionaryRepository::new())),
            subscriptions: SubscriptionService::new(Arc::new(
                InMemorySubscriptionRepository::new(),
            )),
            users: UserService::new(Arc::new(InMemoryUserRepository::new()), verifier),
        }
    }

    #[cfg(feature = "postgres")]
    fn with_postgres(conn: DbConn, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            courses: CourseService::new(Arc::new(PostgresCourseRepository::new(conn.clone()))),
            blogs: BlogService::new(Arc::new(PostgresBlogRepository::new(conn.clone()))),
            dictionary: DictionaryService::new(Arc::new(PostgresDictionaryRepository::new(
                conn.clone(),
            ))),
            subscriptions: SubscriptionService::new(Arc::new(
                PostgresSubscriptionRepository::new(conn.clone()),
            )),
            users: UserService::new(Arc::new(PostgresUserRepository::new(conn)), verifier),
        }
    }
}

/// Pick the credential verifier. Plain equality is the default; Argon2 is
/// opt-in via configuration when compiled in.
fn credential_verifier(config: &AppConfig) -> Arc<dyn CredentialVerifier> {
    #[cfg(feature = "argon2")]
    if config.argon2_credentials {
        tracing::info!("Using the Argon2 credential verifier");
        return Arc::new(Argon2CredentialVerifier::new());
    }

    #[cfg(not(feature = "argon2"))]
    if config.argon2_credentials {
        tracing::warn!(
            "CREDENTIAL_VERIFIER=argon2 requires the argon2 feature; using plaintext comparison"
        );
    }

    Arc::new(PlainTextVerifier)
}

//! Service behavior against the in-memory store.

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;
    use std::sync::Arc;

    use finlearn_core::domain::{
        BlogCategory, BlogFields, CourseCategory, CourseFields, Difficulty, NewUser, TermFields,
        UserType,
    };
    use finlearn_core::error::DomainError;
    use finlearn_core::ports::PlainTextVerifier;
    use finlearn_core::service::{
        BlogService, CourseService, DictionaryService, SubscriptionService, UserService,
    };

    use crate::store::{
        InMemoryBlogRepository, InMemoryCourseRepository, InMemoryDictionaryRepository,
        InMemorySubscriptionRepository, InMemoryUserRepository,
    };

    fn course_service() -> CourseService {
        CourseService::new(Arc::new(InMemoryCourseRepository::new()))
    }

    fn blog_service() -> BlogService {
        BlogService::new(Arc::new(InMemoryBlogRepository::new()))
    }

    fn dictionary_service() -> DictionaryService {
        DictionaryService::new(Arc::new(InMemoryDictionaryRepository::new()))
    }

    fn subscription_service() -> SubscriptionService {
        SubscriptionService::new(Arc::new(InMemorySubscriptionRepository::new()))
    }

    fn user_service() -> UserService {
        UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(PlainTextVerifier),
        )
    }

    fn course_fields(title: &str, active: bool) -> CourseFields {
        CourseFields {
            title: title.to_string(),
            description: "Learn the basics".to_string(),
            category: CourseCategory::Novice,
            image_url: "https://example.com/course.png".to_string(),
            difficulty: Difficulty::Beginner,
            duration: NonZeroU32::new(6).unwrap(),
            is_active: active,
        }
    }

    fn blog_fields(title: &str, published: bool) -> BlogFields {
        BlogFields {
            title: title.to_string(),
            content: "Long form content".to_string(),
            category: BlogCategory::Blogs,
            author: "Priya".to_string(),
            image_url: "https://example.com/blog.png".to_string(),
            summary: "Short summary".to_string(),
            read_time: NonZeroU32::new(5).unwrap(),
            is_published: published,
        }
    }

    fn term_fields(term: &str, definition: &str) -> TermFields {
        TermFields {
            term: term.to_string(),
            definition: definition.to_string(),
            category: "Stock Market".to_string(),
            example: "Example usage".to_string(),
            related_terms: "Market".to_string(),
        }
    }

    fn new_user(email: &str, mobile: &str) -> NewUser {
        NewUser {
            name: "Raj".to_string(),
            email: email.to_string(),
            mobile: mobile.to_string(),
            password: "hunter2".to_string(),
            user_type: UserType::Novice,
        }
    }

    #[tokio::test]
    async fn test_subscribe_rejects_duplicate_email() {
        let service = subscription_service();

        let first = service.subscribe("a@b.com".to_string()).await.unwrap();
        assert!(first.is_active);
        assert!(!first.id.is_empty());

        let err = service.subscribe("a@b.com".to_string()).await.unwrap_err();
        match err {
            DomainError::Duplicate(msg) => assert_eq!(msg, "Email already subscribed"),
            other => panic!("expected duplicate error, got {other:?}"),
        }

        assert_eq!(service.all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unsubscribe_unknown_email_reports_false() {
        let service = subscription_service();

        assert!(!service.unsubscribe("ghost@b.com").await.unwrap());
        assert!(service.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unsubscribe_flips_state_and_keeps_record() {
        let service = subscription_service();
        service.subscribe("a@b.com".to_string()).await.unwrap();

        assert!(service.unsubscribe("a@b.com").await.unwrap());

        let stored = service.by_email("a@b.com").await.unwrap().unwrap();
        assert!(!stored.is_active);
        assert!(service.active().await.unwrap().is_empty());

        // The inactive record still holds the email.
        assert!(matches!(
            service.subscribe("a@b.com".to_string()).await,
            Err(DomainError::Duplicate(_))
        ));

        // Unsubscribing an already-inactive record still reports success.
        assert!(service.unsubscribe("a@b.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_course_update_round_trip() {
        let service = course_service();
        let created = service
            .create(course_fields("Stock Basics", true))
            .await
            .unwrap();

        let mut replacement = course_fields("Stock Basics v2", true);
        replacement.difficulty = Difficulty::Intermediate;
        let updated = service
            .update(&created.id, replacement)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.title, "Stock Basics v2");
        assert_eq!(updated.difficulty, Difficulty::Intermediate);

        let fetched = service.by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Stock Basics v2");
    }

    #[tokio::test]
    async fn test_course_update_missing_id_is_none() {
        let service = course_service();
        let result = service
            .update("missing", course_fields("Nope", true))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_course_delete_signals_exactly_once() {
        let service = course_service();
        let created = service
            .create(course_fields("Stock Basics", true))
            .await
            .unwrap();

        assert!(service.delete(&created.id).await.unwrap());
        assert!(!service.delete(&created.id).await.unwrap());
        assert!(service.by_id(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_course_lifecycle_through_active_listing() {
        let service = course_service();
        let created = service
            .create(course_fields("Mutual Funds", true))
            .await
            .unwrap();

        let active = service.active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, created.id);

        service
            .update(&created.id, course_fields("Mutual Funds", false))
            .await
            .unwrap()
            .unwrap();

        assert!(service.active().await.unwrap().is_empty());
        assert!(service.by_id(&created.id).await.unwrap().is_some());

        assert!(service.delete(&created.id).await.unwrap());
        assert!(service.by_id(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_blog_published_filter() {
        let service = blog_service();
        service
            .create(blog_fields("Public piece", true))
            .await
            .unwrap();
        service.create(blog_fields("Draft", false)).await.unwrap();

        let published = service.published().await.unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].title, "Public piece");

        let by_author = service.by_author("Priya").await.unwrap();
        assert_eq!(by_author.len(), 2);
    }

    #[tokio::test]
    async fn test_dictionary_search_is_case_insensitive_substring() {
        let service = dictionary_service();
        service
            .create(term_fields("Dividend Yield", "Annual dividend over price"))
            .await
            .unwrap();
        service
            .create(term_fields("Bull Market", "Sustained rising prices"))
            .await
            .unwrap();

        let hits = service.search("DIV").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].term, "Dividend Yield");

        assert!(service.search("xyz").await.unwrap().is_empty());

        let by_definition = service.search_definitions("rising").await.unwrap();
        assert_eq!(by_definition.len(), 1);
        assert_eq!(by_definition[0].term, "Bull Market");
    }

    #[tokio::test]
    async fn test_dictionary_exact_term_lookup() {
        let service = dictionary_service();
        service
            .create(term_fields("IPO", "Initial public offering"))
            .await
            .unwrap();

        assert!(service.by_term("IPO").await.unwrap().is_some());
        // Exact lookup does not fall back to substring matching.
        assert!(service.by_term("IP").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email_then_mobile() {
        let service = user_service();
        service
            .register(new_user("raj@example.com", "9000000001"))
            .await
            .unwrap();

        let same_email = service
            .register(new_user("raj@example.com", "9000000002"))
            .await
            .unwrap_err();
        match same_email {
            DomainError::Duplicate(msg) => assert_eq!(msg, "Email already registered"),
            other => panic!("expected duplicate error, got {other:?}"),
        }

        let same_mobile = service
            .register(new_user("other@example.com", "9000000001"))
            .await
            .unwrap_err();
        match same_mobile {
            DomainError::Duplicate(msg) => assert_eq!(msg, "Mobile number already registered"),
            other => panic!("expected duplicate error, got {other:?}"),
        }

        assert_eq!(service.all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_login_touches_last_login() {
        let service = user_service();
        let registered = service
            .register(new_user("raj@example.com", "9000000001"))
            .await
            .unwrap();

        let logged_in = service.login("9000000001", "hunter2").await.unwrap();
        assert_eq!(logged_in.id, registered.id);
        assert!(logged_in.last_login >= registered.last_login);

        let stored = service.by_mobile("9000000001").await.unwrap().unwrap();
        assert_eq!(stored.last_login, logged_in.last_login);
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let service = user_service();
        service
            .register(new_user("raj@example.com", "9000000001"))
            .await
            .unwrap();

        assert!(matches!(
            service.login("9000000001", "wrong").await,
            Err(DomainError::InvalidCredentials)
        ));
        assert!(matches!(
            service.login("9999999999", "hunter2").await,
            Err(DomainError::InvalidCredentials)
        ));
    }
}

#[cfg(test)]
mod tests {
    use crate::database::entity::{course, subscription};
    use crate::database::postgres_repo::{
        PostgresCourseRepository, PostgresSubscriptionRepository,
    };
    use finlearn_core::error::StoreError;
    use finlearn_core::ports::{EntityStore, SubscriptionRepository};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn course_row(id: &str, category: &str) -> course::Model {
        let now = chrono::Utc::now();
        course::Model {
            id: id.to_owned(),
            title: "Stock Market Fundamentals".to_owned(),
            description: "The basics".to_owned(),
            category: category.to_owned(),
            image_url: String::new(),
            difficulty: "Beginner".to_owned(),
            duration: 6,
            is_active: true,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_course_by_id() {
        // Mock the query expectation
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![course_row("course-1", "Novice")]])
            .into_connection();

        let repo = PostgresCourseRepository::new(db);

        let result = repo.find_by_id("course-1").await.unwrap();

        assert!(result.is_some());
        let course = result.unwrap();
        assert_eq!(course.title, "Stock Market Fundamentals");
        assert_eq!(course.duration.get(), 6);
        assert_eq!(course.id, "course-1");
    }

    #[tokio::test]
    async fn test_unknown_category_row_is_a_query_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![course_row("course-1", "Junk")]])
            .into_connection();

        let repo = PostgresCourseRepository::new(db);

        let err = repo.find_by_id("course-1").await.unwrap_err();
        assert!(matches!(err, StoreError::Query(_)));
    }

    #[tokio::test]
    async fn test_exists_by_email_with_no_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<subscription::Model>::new()])
            .into_connection();

        let repo = PostgresSubscriptionRepository::new(db);

        assert!(!repo.exists_by_email("a@b.com").await.unwrap());
    }
}

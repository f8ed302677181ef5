#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use finlearn_core::ports::PlainTextVerifier;
    use serde_json::{Value, json};

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState::with_memory(Arc::new(PlainTextVerifier)))
    }

    fn course_body() -> Value {
        json!({
            "title": "Options Basics",
            "description": "Calls, puts and how premiums move.",
            "category": "Trader",
            "imageUrl": "https://img.example.com/options.png",
            "difficulty": "Beginner",
            "duration": 90,
            "isActive": true
        })
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_course_crud_round_trip() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        // Empty catalog to start with.
        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/api/courses").to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));

        // Create.
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/courses")
                .set_json(course_body())
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        let id = created["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());
        assert_eq!(created["title"], "Options Basics");
        assert!(created["createdAt"].is_string());

        // Read it back.
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/courses/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let fetched: Value = test::read_body_json(resp).await;
        assert_eq!(fetched["duration"], 90);

        // Full-replace update.
        let mut updated_body = course_body();
        updated_body["title"] = json!("Options Basics, Revised");
        updated_body["isActive"] = json!(false);
        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&format!("/api/courses/{id}"))
                .set_json(updated_body)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Value = test::read_body_json(resp).await;
        assert_eq!(updated["title"], "Options Basics, Revised");
        assert_eq!(updated["id"], id.as_str());

        // Deactivated, so the active listing is empty again.
        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/courses/active").to_request(),
        )
        .await;
        let active: Value = test::read_body_json(resp).await;
        assert_eq!(active, json!([]));

        // Delete, then every follow-up on the id is a 404.
        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/api/courses/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Course deleted successfully");

        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/api/courses/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/courses/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Course not found");
    }

    #[actix_web::test]
    async fn test_unknown_course_category_is_a_bad_request() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/courses/category/Guru")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Unknown course category: Guru");
    }

    #[actix_web::test]
    async fn test_update_missing_course_is_not_found() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/courses/no-such-id")
                .set_json(course_body())
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Course not found");
    }

    #[actix_web::test]
    async fn test_subscribe_then_duplicate_is_rejected() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/subscriptions")
                .set_json(json!({"email": "reader@example.com"}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Successfully subscribed!");
        assert_eq!(body["subscription"]["email"], "reader@example.com");
        assert_eq!(body["subscription"]["isActive"], true);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/subscriptions")
                .set_json(json!({"email": "reader@example.com"}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Email already subscribed");
    }

    #[actix_web::test]
    async fn test_unsubscribe_unknown_email_is_not_found() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/subscriptions/unsubscribe")
                .set_json(json!({"email": "ghost@example.com"}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Email not found");
    }

    #[actix_web::test]
    async fn test_unsubscribe_flips_the_flag() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/subscriptions")
                .set_json(json!({"email": "leaver@example.com"}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/subscriptions/unsubscribe")
                .set_json(json!({"email": "leaver@example.com"}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Successfully unsubscribed");

        // The record stays, inactive, so the active listing is empty.
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/subscriptions/active")
                .to_request(),
        )
        .await;
        let active: Value = test::read_body_json(resp).await;
        assert_eq!(active, json!([]));

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/subscriptions").to_request(),
        )
        .await;
        let all: Value = test::read_body_json(resp).await;
        assert_eq!(all.as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_register_then_login() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/users/register")
                .set_json(json!({
                    "name": "Asha",
                    "email": "asha@example.com",
                    "mobile": "9000000001",
                    "password": "hunter2",
                    "userType": "Novice"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["email"], "asha@example.com");

        // Wrong password.
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/users/login")
                .set_json(json!({"mobile": "9000000001", "password": "wrong"}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid credentials");

        // Unknown mobile reads the same as a wrong password.
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/users/login")
                .set_json(json!({"mobile": "9999999999", "password": "hunter2"}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/users/login")
                .set_json(json!({"mobile": "9000000001", "password": "hunter2"}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let user: Value = test::read_body_json(resp).await;
        assert_eq!(user["mobile"], "9000000001");
        assert!(user["lastLogin"].is_string());
    }

    #[actix_web::test]
    async fn test_duplicate_registration_is_rejected() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let body = json!({
            "name": "Asha",
            "email": "asha@example.com",
            "mobile": "9000000001",
            "password": "hunter2",
            "userType": "Novice"
        });
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/users/register")
                .set_json(body.clone())
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/users/register")
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Email already registered");
    }

    #[actix_web::test]
    async fn test_dictionary_search_by_query_param() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/dictionary")
                .set_json(json!({
                    "term": "Dividend Yield",
                    "definition": "Annual dividend as a share of the stock price.",
                    "category": "Stock Market",
                    "example": "A 2% yield on a 100 rupee stock pays 2 rupees a year.",
                    "relatedTerms": "Dividend, Payout Ratio"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/dictionary/search?q=DIV")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let hits: Value = test::read_body_json(resp).await;
        assert_eq!(hits.as_array().unwrap().len(), 1);
        assert_eq!(hits[0]["term"], "Dividend Yield");

        // Exact-term lookup does not fall back to substring matching.
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/dictionary/term/Dividend")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Term not found");

        // The query parameter is required.
        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/dictionary/search").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

//! HTTP handlers and route configuration.

mod blogs;
mod courses;
mod dictionary;
mod health;
mod subscriptions;
mod users;

#[cfg(test)]
mod tests;

use actix_web::web;

/// Configure all application routes.
///
/// Literal segments (`/active`, `/search`, `/register`, ...) are registered
/// before the `/{id}` catch-alls so they are matched first.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/courses")
                    .route("", web::get().to(courses::list))
                    .route("", web::post().to(courses::create))
                    .route("/active", web::get().to(courses::active))
                    .route("/category/{category}", web::get().to(courses::by_category))
                    .route(
                        "/difficulty/{difficulty}",
                        web::get().to(courses::by_difficulty),
                    )
                    .route("/{id}", web::get().to(courses::get))
                    .route("/{id}", web::put().to(courses::update))
                    .route("/{id}", web::delete().to(courses::delete)),
            )
            .service(
                web::scope("/blogs")
                    .route("", web::get().to(blogs::list))
                    .route("", web::post().to(blogs::create))
                    .route("/published", web::get().to(blogs::published))
                    .route("/category/{category}", web::get().to(blogs::by_category))
                    .route("/author/{author}", web::get().to(blogs::by_author))
                    .route("/{id}", web::get().to(blogs::get))
                    .route("/{id}", web::put().to(blogs::update))
                    .route("/{id}", web::delete().to(blogs::delete)),
            )
            .service(
                web::scope("/dictionary")
                    .route("", web::get().to(dictionary::list))
                    .route("", web::post().to(dictionary::create))
                    .route("/search", web::get().to(dictionary::search))
                    .route(
                        "/definitions",
                        web::get().to(dictionary::search_definitions),
                    )
                    .route(
                        "/category/{category}",
                        web::get().to(dictionary::by_category),
                    )
                    .route("/term/{term}", web::get().to(dictionary::by_term))
                    .route("/{id}", web::get().to(dictionary::get))
                    .route("/{id}", web::put().to(dictionary::update))
                    .route("/{id}", web::delete().to(dictionary::delete)),
            )
            .service(
                web::scope("/subscriptions")
                    .route("", web::get().to(subscriptions::list))
                    .route("", web::post().to(subscriptions::subscribe))
                    .route("/active", web::get().to(subscriptions::active))
                    .route("/unsubscribe", web::put().to(subscriptions::unsubscribe))
                    .route("/{id}", web::get().to(subscriptions::get))
                    .route("/{id}", web::delete().to(subscriptions::delete)),
            )
            .service(
                web::scope("/users")
                    .route("", web::get().to(users::list))
                    .route("/active", web::get().to(users::active))
                    .route("/type/{userType}", web::get().to(users::by_type))
                    .route("/register", web::post().to(users::register))
                    .route("/login", web::post().to(users::login))
                    .route("/{id}", web::get().to(users::get))
                    .route("/{id}", web::put().to(users::update))
                    .route("/{id}", web::delete().to(users::delete)),
            ),
    );
}

//! Course catalog handlers.

use actix_web::{HttpResponse, web};

use finlearn_core::domain::{CourseCategory, CourseFields, Difficulty};
use finlearn_shared::MessageResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/courses
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let courses = state.courses.all().await?;
    Ok(HttpResponse::Ok().json(courses))
}

/// GET /api/courses/active
pub async fn active(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let courses = state.courses.active().await?;
    Ok(HttpResponse::Ok().json(courses))
}

/// GET /api/courses/category/{category}
pub async fn by_category(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let category = path
        .into_inner()
        .parse::<CourseCategory>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let courses = state.courses.by_category(category).await?;
    Ok(HttpResponse::Ok().json(courses))
}

/// GET /api/courses/difficulty/{difficulty}
pub async fn by_difficulty(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let difficulty = path
        .into_inner()
        .parse::<Difficulty>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let courses = state.courses.by_difficulty(difficulty).await?;
    Ok(HttpResponse::Ok().json(courses))
}

/// GET /api/courses/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let course = state
        .courses
        .by_id(&path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;
    Ok(HttpResponse::Ok().json(course))
}

/// POST /api/courses
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CourseFields>,
) -> AppResult<HttpResponse> {
    let course = state.courses.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(course))
}

/// PUT /api/courses/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<CourseFields>,
) -> AppResult<HttpResponse> {
    let course = state
        .courses
        .update(&path.into_inner(), body.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;
    Ok(HttpResponse::Ok().json(course))
}

/// DELETE /api/courses/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    if state.courses.delete(&path.into_inner()).await? {
        Ok(HttpResponse::Ok().json(MessageResponse::new("Course deleted successfully")))
    } else {
        Err(AppError::NotFound("Course not found".to_string()))
    }
}

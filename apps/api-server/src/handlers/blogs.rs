//! Blog handlers.

use actix_web::{HttpResponse, web};

use finlearn_core::domain::{BlogCategory, BlogFields};
use finlearn_shared::MessageResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/blogs
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.all().await?;
    Ok(HttpResponse::Ok().json(blogs))
}

/// GET /api/blogs/published
pub async fn published(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.published().await?;
    Ok(HttpResponse::Ok().json(blogs))
}

/// GET /api/blogs/category/{category}
pub async fn by_category(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let category = path
        .into_inner()
        .parse::<BlogCategory>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let blogs = state.blogs.by_category(category).await?;
    Ok(HttpResponse::Ok().json(blogs))
}

/// GET /api/blogs/author/{author}
pub async fn by_author(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let blogs = state.blogs.by_author(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(blogs))
}

/// GET /api/blogs/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let blog = state
        .blogs
        .by_id(&path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;
    Ok(HttpResponse::Ok().json(blog))
}

/// POST /api/blogs
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<BlogFields>,
) -> AppResult<HttpResponse> {
    let blog = state.blogs.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(blog))
}

/// PUT /api/blogs/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<BlogFields>,
) -> AppResult<HttpResponse> {
    let blog = state
        .blogs
        .update(&path.into_inner(), body.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;
    Ok(HttpResponse::Ok().json(blog))
}

/// DELETE /api/blogs/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    if state.blogs.delete(&path.into_inner()).await? {
        Ok(HttpResponse::Ok().json(MessageResponse::new("Blog deleted successfully")))
    } else {
        Err(AppError::NotFound("Blog not found".to_string()))
    }
}

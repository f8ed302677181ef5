//! Dictionary handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use finlearn_core::domain::TermFields;
use finlearn_shared::MessageResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Query string for the substring searches: `?q=div`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// GET /api/dictionary
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let terms = state.dictionary.all().await?;
    Ok(HttpResponse::Ok().json(terms))
}

/// GET /api/dictionary/search?q=
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let terms = state.dictionary.search(&query.q).await?;
    Ok(HttpResponse::Ok().json(terms))
}

/// GET /api/dictionary/definitions?q=
pub async fn search_definitions(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let terms = state.dictionary.search_definitions(&query.q).await?;
    Ok(HttpResponse::Ok().json(terms))
}

/// GET /api/dictionary/category/{category}
pub async fn by_category(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let terms = state.dictionary.by_category(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(terms))
}

/// GET /api/dictionary/term/{term}
pub async fn by_term(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let term = state
        .dictionary
        .by_term(&path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Term not found".to_string()))?;
    Ok(HttpResponse::Ok().json(term))
}

/// GET /api/dictionary/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let term = state
        .dictionary
        .by_id(&path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Term not found".to_string()))?;
    Ok(HttpResponse::Ok().json(term))
}

/// POST /api/dictionary
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<TermFields>,
) -> AppResult<HttpResponse> {
    let term = state.dictionary.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(term))
}

/// PUT /api/dictionary/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<TermFields>,
) -> AppResult<HttpResponse> {
    let term = state
        .dictionary
        .update(&path.into_inner(), body.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Term not found".to_string()))?;
    Ok(HttpResponse::Ok().json(term))
}

/// DELETE /api/dictionary/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    if state.dictionary.delete(&path.into_inner()).await? {
        Ok(HttpResponse::Ok().json(MessageResponse::new("Term deleted successfully")))
    } else {
        Err(AppError::NotFound("Term not found".to_string()))
    }
}

//! User account handlers.

use actix_web::{HttpResponse, web};

use finlearn_core::domain::{NewUser, UserType, UserUpdate};
use finlearn_shared::MessageResponse;
use finlearn_shared::dto::LoginRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.all().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// GET /api/users/active
pub async fn active(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.active().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// GET /api/users/type/{userType}
pub async fn by_type(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user_type = path
        .into_inner()
        .parse::<UserType>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let users = state.users.by_type(user_type).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// GET /api/users/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let user = state
        .users
        .by_id(&path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(HttpResponse::Ok().json(user))
}

/// POST /api/users/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<NewUser>,
) -> AppResult<HttpResponse> {
    let user = state.users.register(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// POST /api/users/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let user = state.users.login(&req.mobile, &req.password).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// PUT /api/users/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UserUpdate>,
) -> AppResult<HttpResponse> {
    let user = state
        .users
        .update(&path.into_inner(), body.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(HttpResponse::Ok().json(user))
}

/// DELETE /api/users/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    if state.users.delete(&path.into_inner()).await? {
        Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted successfully")))
    } else {
        Err(AppError::NotFound("User not found".to_string()))
    }
}

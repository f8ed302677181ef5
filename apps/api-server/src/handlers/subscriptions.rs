//! Subscription handlers.

use actix_web::{HttpResponse, web};

use finlearn_shared::MessageResponse;
use finlearn_shared::dto::{SubscribeRequest, SubscribeResponse, UnsubscribeRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/subscriptions
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let subscriptions = state.subscriptions.all().await?;
    Ok(HttpResponse::Ok().json(subscriptions))
}

/// GET /api/subscriptions/active
pub async fn active(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let subscriptions = state.subscriptions.active().await?;
    Ok(HttpResponse::Ok().json(subscriptions))
}

/// GET /api/subscriptions/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let subscription = state
        .subscriptions
        .by_id(&path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Subscription not found".to_string()))?;
    Ok(HttpResponse::Ok().json(subscription))
}

/// POST /api/subscriptions
pub async fn subscribe(
    state: web::Data<AppState>,
    body: web::Json<SubscribeRequest>,
) -> AppResult<HttpResponse> {
    let subscription = state.subscriptions.subscribe(body.into_inner().email).await?;
    Ok(HttpResponse::Created().json(SubscribeResponse {
        message: "Successfully subscribed!".to_string(),
        subscription,
    }))
}

/// PUT /api/subscriptions/unsubscribe
pub async fn unsubscribe(
    state: web::Data<AppState>,
    body: web::Json<UnsubscribeRequest>,
) -> AppResult<HttpResponse> {
    if state.subscriptions.unsubscribe(&body.email).await? {
        Ok(HttpResponse::Ok().json(MessageResponse::new("Successfully unsubscribed")))
    } else {
        Err(AppError::NotFound("Email not found".to_string()))
    }
}

/// DELETE /api/subscriptions/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    if state.subscriptions.delete(&path.into_inner()).await? {
        Ok(HttpResponse::Ok().json(MessageResponse::new("Subscription deleted successfully")))
    } else {
        Err(AppError::NotFound("Subscription not found".to_string()))
    }
}

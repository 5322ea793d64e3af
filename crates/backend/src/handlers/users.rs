use axum::{extract::Path, Json};
use contracts::domain::user::{RegisterUserDto, UpdateUserDto, User, UserOverview};
use contracts::system::auth::SendEmailRequest;
use serde_json::json;

use crate::domain::user;
use crate::shared::error::{parse_id, AppError};
use crate::shared::mail;
use crate::system::auth::extractor::CurrentUser;

/// POST /api/v1/users: registration, no token required
pub async fn register(
    Json(dto): Json<RegisterUserDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    let account = user::service::register(dto).await?;
    Ok(Json(json!({ "ok": "user added!", "user": account })))
}

/// GET /api/v1/users/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<UserOverview>, AppError> {
    let user_id = parse_id(&id)?;
    Ok(Json(user::service::overview(user_id).await?))
}

/// PATCH /api/v1/users/:id
pub async fn update(
    current: CurrentUser,
    Path(id): Path<String>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<Json<User>, AppError> {
    let user_id = parse_id(&id)?;
    Ok(Json(user::service::update(current.id(), user_id, dto).await?))
}

/// DELETE /api/v1/users/:id
pub async fn delete(
    current: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<bool>, AppError> {
    let user_id = parse_id(&id)?;
    user::service::delete(current.id(), user_id).await?;
    Ok(Json(true))
}

/// POST /api/v1/users/sendemail
pub async fn send_email(
    _current: CurrentUser,
    Json(request): Json<SendEmailRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    mail::relay(&request).await?;
    Ok(Json(json!({ "ok": "email sent!" })))
}

use axum::Json;
use contracts::domain::user::Profile;
use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::domain::user;
use crate::shared::error::AppError;
use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::jwt;

/// POST /api/v1/auth/login
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, AppError> {
    let account = user::service::verify_credentials(&request.email, &request.password).await?;

    let token =
        jwt::generate_token(account.id).map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(LoginResponse { token }))
}

/// POST /api/v1/auth/profile
pub async fn profile(current: CurrentUser) -> Result<Json<Profile>, AppError> {
    let profile = user::service::profile(current.id()).await?;
    Ok(Json(profile))
}

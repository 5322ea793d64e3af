use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use contracts::system::auth::TokenClaims;

use crate::shared::error::AppError;

/// Extractor for the authenticated user's token claims.
/// Usage in handlers: `async fn handler(CurrentUser(claims): CurrentUser)`
pub struct CurrentUser(pub TokenClaims);

impl CurrentUser {
    pub fn id(&self) -> i32 {
        self.0.sub
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Claims placed in extensions by the require_auth middleware win;
        // on routes that mix public and protected methods the middleware is
        // not layered, so validate the x-auth-token header here instead.
        if let Some(claims) = parts.extensions.get::<TokenClaims>() {
            return Ok(CurrentUser(claims.clone()));
        }

        let token = parts
            .headers
            .get("x-auth-token")
            .and_then(|h| h.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let claims =
            super::jwt::validate_token(token).map_err(|_| AppError::Unauthorized)?;

        Ok(CurrentUser(claims))
    }
}

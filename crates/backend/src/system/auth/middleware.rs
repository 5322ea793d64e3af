use axum::{body::Body, extract::Request, middleware::Next, response::Response};

use crate::shared::error::AppError;

/// Middleware that requires a valid session token in the `x-auth-token`
/// header. Claims are stored in request extensions for the handlers.
pub async fn require_auth(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get("x-auth-token")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let claims = super::jwt::validate_token(token).map_err(|_| AppError::Unauthorized)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error taxonomy. Every handler and service path resolves to
/// one of these; `IntoResponse` turns them into status + `{"msg"}` bodies.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("{0} not found!")]
    NotFound(&'static str),

    #[error("mail relay failed: {0}")]
    Mail(String),

    #[error("{0}")]
    Internal(String),

    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Mail(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Database failures are logged in full and masked on the wire
        let msg = match &self {
            AppError::Db(err) => {
                tracing::error!("database error: {err}");
                "Internal server error".to_string()
            }
            AppError::Mail(err) => {
                tracing::error!("mail relay error: {err}");
                "mail transport unavailable".to_string()
            }
            AppError::Internal(err) => {
                tracing::error!("internal error: {err}");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "msg": msg }))).into_response()
    }
}

/// Parse a path id, rejecting non-numeric input the way the API always has.
pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .map_err(|_| AppError::BadRequest("Id must be a number!".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::Forbidden("Only owner can delete!").status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(AppError::NotFound("order").status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(AppError::NotFound("order").to_string(), "order not found!");
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(parse_id("fourtytwo").is_err());
        assert!(parse_id("").is_err());
    }
}

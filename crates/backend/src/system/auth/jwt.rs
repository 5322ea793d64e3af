use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::shared::config;

/// Generate a signed session token for the given user.
pub fn generate_token(user_id: i32) -> Result<String> {
    let auth = &config::get().auth;
    sign(user_id, &auth.secret, auth.token_lifetime_hours)
}

/// Validate a session token and extract its claims.
pub fn validate_token(token: &str) -> Result<TokenClaims> {
    verify(token, &config::get().auth.secret)
}

fn sign(user_id: i32, secret: &str, lifetime_hours: i64) -> Result<String> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: user_id,
        iat: now.timestamp() as usize,
        exp: (now + chrono::Duration::hours(lifetime_hours)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode session token")
}

fn verify(token: &str, secret: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode session token")?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let token = sign(7, "test-secret", 1).unwrap();
        let claims = verify(&token, "test-secret").unwrap();
        assert_eq!(claims.sub, 7);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = sign(7, "test-secret", 1).unwrap();
        assert!(verify(&token, "another-secret").is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(verify("not.a.token", "test-secret").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token = sign(7, "test-secret", -1).unwrap();
        assert!(verify(&token, "test-secret").is_err());
    }
}

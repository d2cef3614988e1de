/**
 * Session Tokens
 *
 * This module handles JWT token generation and validation for user
 * sessions. The signing secret is injected by the caller (it lives in
 * `ServerConfig`, loaded once at process start) and the time-to-live is
 * a parameter so call sites own their expiry policy.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
///
/// A session token asserts exactly two things about its bearer: the
/// user id (`sub`) and the email. Everything else is expiry metadata.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// Parse the user id out of the `sub` claim
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Create a JWT token for a user
///
/// # Arguments
/// * `secret` - Signing secret from server configuration
/// * `user_id` - User ID (UUID)
/// * `email` - User email
/// * `ttl` - How long the token stays valid, relative to now
///
/// # Returns
/// JWT token string
pub fn create_token(
    secret: &str,
    user_id: Uuid,
    email: &str,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let exp = now + ttl;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp: exp.timestamp().max(0) as u64,
        iat: now.timestamp().max(0) as u64,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a JWT token
///
/// Fails if the signature is invalid, the token is structurally
/// malformed, or the `exp` claim is in the past.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_create_and_verify_token() {
        let user_id = Uuid::new_v4();
        let token = create_token(SECRET, user_id, "test@example.com", Duration::hours(1)).unwrap();
        assert!(!token.is_empty());

        let claims = verify_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "test@example.com");
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn test_verify_malformed_token() {
        let result = verify_token(SECRET, "invalid.token.here");
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_wrong_secret() {
        let user_id = Uuid::new_v4();
        let token = create_token(SECRET, user_id, "test@example.com", Duration::hours(1)).unwrap();

        let result = verify_token("another-secret", &token);
        assert!(matches!(
            result.unwrap_err().kind(),
            ErrorKind::InvalidSignature
        ));
    }

    #[test]
    fn test_verify_expired_token() {
        let user_id = Uuid::new_v4();
        // Expired well past the default validation leeway.
        let token = create_token(SECRET, user_id, "test@example.com", Duration::hours(-2)).unwrap();

        let result = verify_token(SECRET, &token);
        assert!(matches!(
            result.unwrap_err().kind(),
            ErrorKind::ExpiredSignature
        ));
    }
}

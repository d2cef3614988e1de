/**
 * Authentication Middleware
 *
 * Request-level gate for protected routes. It extracts the bearer
 * token from the Authorization header, verifies it, and attaches the
 * authenticated identity to the request extensions. It is a pure gate:
 * no storage reads or writes happen here.
 */

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated user data extracted from the session token claims
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Pull the bearer token out of the Authorization header
///
/// Returns `None` when the header is absent, not valid UTF-8, or not
/// in `Bearer <token>` form.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Authentication middleware
///
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Attaches `AuthenticatedUser` to the request extensions
///
/// Any failure short-circuits with 401 and the uniform error body.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        ApiError::unauthenticated("Not authenticated.")
    })?;

    let claims = verify_token(&state.config.jwt_secret, token).map_err(|e| {
        tracing::warn!("Token verification failed: {:?}", e);
        ApiError::unauthenticated("Not authenticated.")
    })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!("Invalid user id in token claims: {:?}", e);
        ApiError::unauthenticated("Not authenticated.")
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Used as a handler parameter to retrieve the identity the middleware
/// attached. Rejects with 401 if the guard was bypassed.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S: Send + Sync> axum::extract::FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::unauthenticated("Not authenticated.")
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use axum::http::Request;

    #[test]
    fn test_bearer_token_present() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Basic abc123".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);
    }

    #[tokio::test]
    async fn test_auth_user_extractor() {
        let request = Request::builder()
            .uri("http://example.com")
            .extension(AuthenticatedUser {
                user_id: Uuid::new_v4(),
                email: "test@example.com".to_string(),
            })
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let extracted = AuthUser::from_request_parts(&mut parts, &()).await;
        assert_eq!(extracted.unwrap().0.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_auth_user_extractor_missing() {
        let request = Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let extracted = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(
            extracted.unwrap_err(),
            ApiError::Unauthenticated(_)
        ));
    }
}

use super::{ApiError, AppState};
use crate::domain::User;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{header, request::Parts},
};
use serde::Deserialize;
use tracing::debug;

/// Extractor for the authenticated caller.
///
/// The access token comes from `Authorization: Bearer <token>`, or from the
/// `access_token` query parameter when no `Authorization` header is sent.
/// Anything else is rejected with [`ApiError::Unauthorized`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[derive(Debug, Deserialize)]
struct AccessTokenQuery {
    access_token: Option<String>,
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = access_token(parts) else {
            debug!(path = %parts.uri.path(), "Rejecting request without an access token");
            return Err(ApiError::Unauthorized);
        };

        match state.authenticator.authenticate(&token).await {
            Some(user) => Ok(CurrentUser(user)),
            None => {
                debug!(path = %parts.uri.path(), "Rejecting request with an unknown access token");
                Err(ApiError::Unauthorized)
            }
        }
    }
}

fn access_token(parts: &Parts) -> Option<String> {
    // A malformed Authorization header does not fall back to the query string
    if let Some(value) = parts.headers.get(header::AUTHORIZATION) {
        return value.to_str().ok().and_then(bearer_token).map(str::to_owned);
    }

    Query::<AccessTokenQuery>::try_from_uri(&parts.uri)
        .ok()
        .and_then(|Query(query)| query.access_token)
        .filter(|token| !token.is_empty())
}

fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::local::StaticKalturaConfig;
    use crate::ports::auth::MockAuthenticator;
    use axum::http::Request;
    use std::sync::Arc;

    fn state(authenticator: MockAuthenticator) -> AppState {
        AppState::new(
            Arc::new(StaticKalturaConfig::default()),
            Arc::new(authenticator),
        )
    }

    fn parts(uri: &str, authorization: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(bearer_token("bearer  abc "), Some("abc"));
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Bearer   "), None);
    }

    #[test]
    fn test_token_from_header() {
        let parts = parts("/api/v1/services/kaltura", Some("Bearer abc"));
        assert_eq!(access_token(&parts), Some("abc".to_string()));
    }

    #[test]
    fn test_token_from_query() {
        let parts = parts("/api/v1/services/kaltura?access_token=abc", None);
        assert_eq!(access_token(&parts), Some("abc".to_string()));
    }

    #[test]
    fn test_malformed_header_ignores_query() {
        let parts = parts("/api/v1/services/kaltura?access_token=abc", Some("Token abc"));
        assert_eq!(access_token(&parts), None);
    }

    #[test]
    fn test_no_token() {
        assert_eq!(access_token(&parts("/api/v1/services/kaltura", None)), None);
        assert_eq!(
            access_token(&parts("/api/v1/services/kaltura?access_token=", None)),
            None
        );
    }

    #[tokio::test]
    async fn test_extractor_resolves_user() {
        let mut authenticator = MockAuthenticator::new();
        authenticator
            .expect_authenticate()
            .withf(|token| token == "abc")
            .times(1)
            .returning(|_| Some(User::new("7")));
        let state = state(authenticator);

        let mut parts = parts("/api/v1/services/kaltura", Some("Bearer abc"));
        let CurrentUser(user) = CurrentUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();

        assert_eq!(user, User::new("7"));
    }

    #[tokio::test]
    async fn test_extractor_rejects_unknown_token() {
        let mut authenticator = MockAuthenticator::new();
        authenticator
            .expect_authenticate()
            .times(1)
            .returning(|_| None);
        let state = state(authenticator);

        let mut parts = parts("/api/v1/services/kaltura?access_token=abc", None);
        let result = CurrentUser::from_request_parts(&mut parts, &state).await;

        assert_eq!(result.unwrap_err(), ApiError::Unauthorized);
    }

    #[tokio::test]
    async fn test_extractor_skips_lookup_without_token() {
        // No expectation set: any call to the authenticator panics
        let state = state(MockAuthenticator::new());

        let mut parts = parts("/api/v1/services/kaltura", None);
        let result = CurrentUser::from_request_parts(&mut parts, &state).await;

        assert_eq!(result.unwrap_err(), ApiError::Unauthorized);
    }
}

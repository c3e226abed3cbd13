use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::auth::claims::CurrentUser;
use crate::auth::session::{self, SESSION_COOKIE};
use crate::error::ApiError;
use crate::state::AppState;

/// Session-authentication middleware.
///
/// Decodes and verifies the session token, then injects the caller identity
/// into request extensions. Requests without a valid session are rejected
/// here, before any handler or store access runs.
pub async fn session_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .or_else(|| bearer_token(request.headers()))
        .ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;

    let claims = session::decode_token(&state.config.session, &token)
        .map_err(|_| ApiError::unauthorized("Unauthorized"))?;

    request.extensions_mut().insert(CurrentUser::from(claims));
    Ok(next.run(request).await)
}

/// Fallback transport for non-browser clients: Authorization: Bearer <token>.
/// The cookie is authoritative when both are present.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn bearer_token_is_extracted() {
        let headers = headers_with_auth("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn non_bearer_schemes_are_ignored() {
        let headers = headers_with_auth("Basic dXNlcjpwYXNz");
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn empty_bearer_token_is_ignored() {
        let headers = headers_with_auth("Bearer ");
        assert_eq!(bearer_token(&headers), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}

use axum_extra::extract::cookie::{Cookie, SameSite};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::auth::claims::SessionClaims;
use crate::config::SessionConfig;

pub const SESSION_COOKIE: &str = "complaints.session-token";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session secret is not configured")]
    MissingSecret,

    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Sign a claim set into a stateless session token.
pub fn issue_token(config: &SessionConfig, claims: &SessionClaims) -> Result<String, SessionError> {
    if config.secret.is_empty() {
        return Err(SessionError::MissingSecret);
    }

    let key = EncodingKey::from_secret(config.secret.as_bytes());
    Ok(encode(&Header::default(), claims, &key)?)
}

/// Verify signature and expiry, returning the embedded claims.
pub fn decode_token(config: &SessionConfig, token: &str) -> Result<SessionClaims, SessionError> {
    if config.secret.is_empty() {
        return Err(SessionError::MissingSecret);
    }

    let key = DecodingKey::from_secret(config.secret.as_bytes());
    let data = decode::<SessionClaims>(token, &key, &Validation::default())?;
    Ok(data.claims)
}

/// Session cookie: httpOnly, SameSite=Lax, root path. Secure and Domain are
/// environment-gated through [`SessionConfig`].
pub fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie.set_secure(config.secure_cookies);
    if let Some(domain) = &config.cookie_domain {
        cookie.set_domain(domain.clone());
    }
    cookie
}

/// Name/path/domain stub matching [`session_cookie`], for cookie removal.
pub fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    if let Some(domain) = &config.cookie_domain {
        cookie.set_domain(domain.clone());
    }
    cookie
}

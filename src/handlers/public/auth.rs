use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::auth::{credentials, session, CurrentUser, SessionClaims};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// POST /auth/login - verify credentials and start a session.
///
/// Missing fields, unknown email and wrong password all produce the same
/// rejection. The token travels only in the cookie, never in the body.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<CurrentUser>), ApiError> {
    let (Some(email), Some(password)) = (non_empty(payload.email), non_empty(payload.password))
    else {
        return Err(ApiError::unauthorized("Invalid email or password"));
    };

    let user = credentials::verify_credentials(&state.pool, &email, &password)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    let claims = SessionClaims::new(&user, state.config.session.ttl_days);
    let token = session::issue_token(&state.config.session, &claims)?;
    let jar = jar.add(session::session_cookie(&state.config.session, token));

    tracing::info!(user = %user.id, "session started");
    Ok((jar, Json(user)))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

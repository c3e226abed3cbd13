use axum::{extract::State, Extension, Json};
use axum_extra::extract::CookieJar;
use serde_json::{json, Value};

use crate::auth::{session, CurrentUser};
use crate::state::AppState;

/// GET /api/auth/whoami - echo the caller's session identity.
pub async fn whoami(Extension(user): Extension<CurrentUser>) -> Json<CurrentUser> {
    Json(user)
}

/// DELETE /api/auth/session - end the session.
///
/// Tokens are stateless, so logout is cookie removal; an already-issued
/// token stays valid until it expires.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Value>) {
    let jar = jar.remove(session::removal_cookie(&state.config.session));
    (jar, Json(json!({ "message": "Logged out" })))
}

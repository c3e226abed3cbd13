pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    extract::State,
    http::StatusCode,
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_public_routes())
        // Protected API
        .merge(api_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_public_routes() -> Router<AppState> {
    use handlers::public::auth;

    Router::new().route("/auth/login", post(auth::login))
}

fn api_routes(state: AppState) -> Router<AppState> {
    use handlers::protected::{attachments, auth, complaints, notifications};

    Router::new()
        // Session management for authenticated users
        .route("/api/auth/whoami", get(auth::whoami))
        .route("/api/auth/session", delete(auth::logout))
        // Complaints
        .route("/api/complaints", get(complaints::complaint_list))
        .route(
            "/api/complaints/:id",
            get(complaints::complaint_get).put(complaints::complaint_put),
        )
        // Attachments
        .route("/api/attachments/:id", delete(attachments::attachment_delete))
        // Notifications
        .route("/api/notifications", get(notifications::notification_list))
        .route(
            "/api/notifications/:id",
            get(notifications::notification_get)
                .put(notifications::notification_put)
                .delete(notifications::notification_delete),
        )
        // Everything above requires a valid session
        .layer(from_fn_with_state(state, middleware::session_auth))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Complaints API",
        "version": version,
        "endpoints": {
            "health": "/health (public)",
            "login": "/auth/login (public)",
            "session": "/api/auth/session, /api/auth/whoami (session)",
            "complaints": "/api/complaints[/:id] (session)",
            "attachments": "/api/attachments/:id (session)",
            "notifications": "/api/notifications[/:id] (session)",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match database::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(err) => {
            tracing::warn!("health check failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}

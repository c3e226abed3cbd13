use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;

/// Shared per-process context handed to every handler.
///
/// Request handling itself is stateless; this carries only the connection
/// pool and the immutable configuration built at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pool: PgPool,
}

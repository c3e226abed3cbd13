use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Immutable application configuration, built once at process start from the
/// environment and passed by reference through router state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC secret for signing session tokens.
    pub secret: String,
    /// Session lifetime; expiry is the only termination mechanism.
    pub ttl_days: i64,
    /// Set the Secure attribute on session cookies. On by default only in
    /// production, where the API sits behind a trusted HTTPS transport.
    pub secure_cookies: bool,
    /// Optional Domain attribute for session cookies.
    pub cookie_domain: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory attachment paths are resolved against.
    pub upload_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let secret = env::var("SESSION_SECRET").context("SESSION_SECRET must be set")?;

        Ok(Self::defaults(environment, database_url, secret).with_env_overrides())
    }

    fn defaults(environment: Environment, database_url: String, secret: String) -> Self {
        Self {
            environment,
            server: ServerConfig { port: 3000 },
            database: DatabaseConfig {
                url: database_url,
                max_connections: match environment {
                    Environment::Production => 50,
                    Environment::Staging => 20,
                    Environment::Development => 10,
                },
                connect_timeout_secs: 30,
            },
            session: SessionConfig {
                secret,
                ttl_days: 30,
                secure_cookies: environment == Environment::Production,
                cookie_domain: None,
            },
            storage: StorageConfig {
                upload_dir: PathBuf::from("public"),
            },
        }
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECT_TIMEOUT_SECS") {
            self.database.connect_timeout_secs =
                v.parse().unwrap_or(self.database.connect_timeout_secs);
        }
        if let Ok(v) = env::var("SESSION_TTL_DAYS") {
            self.session.ttl_days = v.parse().unwrap_or(self.session.ttl_days);
        }
        if let Ok(v) = env::var("SESSION_SECURE_COOKIES") {
            self.session.secure_cookies = v.parse().unwrap_or(self.session.secure_cookies);
        }
        if let Ok(v) = env::var("SESSION_COOKIE_DOMAIN") {
            if !v.is_empty() {
                self.session.cookie_domain = Some(v);
            }
        }
        if let Ok(v) = env::var("UPLOAD_DIR") {
            self.storage.upload_dir = PathBuf::from(v);
        }
        self
    }
}

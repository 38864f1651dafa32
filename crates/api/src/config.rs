use intake_core::workflow::TransitionPolicy;

use crate::auth::jwt::JwtConfig;
use crate::auth::pin::AccessConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Which statuses a manager may decide from (default: `permissive`).
    pub decision_policy: TransitionPolicy,
    /// Role token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Per-role PINs and display names.
    pub access: AccessConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DECISION_POLICY`      | `permissive`               |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let decision_policy: TransitionPolicy = std::env::var("DECISION_POLICY")
            .unwrap_or_else(|_| TransitionPolicy::default().as_str().into())
            .parse()
            .expect("DECISION_POLICY must be 'permissive' or 'guarded'");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            decision_policy,
            jwt: JwtConfig::from_env(),
            access: AccessConfig::from_env(),
        }
    }
}

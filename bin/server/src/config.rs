//! Centralized server configuration.
//!
//! Loaded once at startup via the `config` crate from environment variables,
//! using `__` as the nesting separator (`GOOGLE__CLIENT_ID`,
//! `SESSION__SECRET`, ...).

use interview_tracker_core::Result;
use interview_tracker_platform_access::{ConfigurationError, OAuthConfig};
use serde::Deserialize;
use std::net::SocketAddr;

/// Cookie secret used when none is configured. Fine for local development only.
pub const DEFAULT_SESSION_SECRET: &str = "s3cr3t";

/// Longest cookie lifetime browsers honor.
pub const MAX_SESSION_DAYS: i64 = 400;

/// Top-level server configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// PostgreSQL connection URL for the application and note tables.
    pub database_url: String,

    /// Address the HTTP listener binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// Google OAuth credentials.
    #[serde(default)]
    pub google: GoogleConfig,

    /// Session cookie configuration.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Google OAuth client settings.
///
/// The credentials are optional here so that a missing value surfaces as a
/// `ConfigurationError` naming the credential, not a generic parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    /// Callback URL registered with Google.
    #[serde(default = "default_callback_url")]
    pub callback_url: String,
}

/// Session cookie settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Secret the cookie encryption key is derived from.
    #[serde(default = "default_session_secret")]
    pub secret: String,

    /// Whether to set the Secure flag on cookies (requires HTTPS).
    #[serde(default)]
    pub secure_cookies: bool,

    /// Cookie lifetime in days.
    #[serde(default = "default_max_age_days")]
    pub max_age_days: i64,
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn default_callback_url() -> String {
    "http://localhost:5173/auth/google/callback".to_string()
}

fn default_cookie_name() -> String {
    "_session".to_string()
}

fn default_session_secret() -> String {
    DEFAULT_SESSION_SECRET.to_string()
}

fn default_max_age_days() -> i64 {
    30
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            callback_url: default_callback_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            secret: default_session_secret(),
            secure_cookies: false,
            max_age_days: default_max_age_days(),
        }
    }
}

impl SessionConfig {
    /// Returns true if the cookie secret was left at its development default.
    #[must_use]
    pub fn uses_default_secret(&self) -> bool {
        self.secret.trim() == DEFAULT_SESSION_SECRET
    }

    /// Cookie lifetime, clamped to between one and `MAX_SESSION_DAYS` days.
    #[must_use]
    pub fn max_age(&self) -> time::Duration {
        time::Duration::days(self.max_age_days.clamp(1, MAX_SESSION_DAYS))
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> std::result::Result<Self, config::ConfigError> {
        Self::load(
            config::Environment::default()
                .separator("__")
                .try_parsing(true),
        )
    }

    /// Loads configuration from an arbitrary source.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn load<S>(source: S) -> std::result::Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    /// Validates the Google credentials into an `OAuthConfig`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the client id or secret is missing.
    pub fn oauth_config(&self) -> Result<OAuthConfig, ConfigurationError> {
        OAuthConfig::new(
            self.google.client_id.clone().unwrap_or_default(),
            self.google.client_secret.clone().unwrap_or_default(),
            self.google.callback_url.clone(),
        )
    }
}

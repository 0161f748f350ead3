//! Error types for the platform-access crate.
//!
//! Errors are designed for layered context using rootcause:
//! - `ConfigurationError`: startup-only, fatal
//! - `AuthenticationError`: per-request sign-in and session failures

use std::fmt;

/// Errors raised while validating OAuth configuration at startup.
///
/// Any of these means the process must not serve requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The OAuth client ID is missing or blank.
    MissingClientId,
    /// The OAuth client secret is missing or blank.
    MissingClientSecret,
    /// The redirect URI is blank or not an absolute URL.
    InvalidRedirectUri { uri: String, reason: String },
    /// A provider endpoint URL could not be parsed.
    InvalidEndpoint { endpoint: String, reason: String },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingClientId => write!(f, "missing Google OAuth client id"),
            Self::MissingClientSecret => write!(f, "missing Google OAuth client secret"),
            Self::InvalidRedirectUri { uri, reason } => {
                write!(f, "invalid redirect URI '{uri}': {reason}")
            }
            Self::InvalidEndpoint { endpoint, reason } => {
                write!(f, "invalid provider endpoint '{endpoint}': {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Errors from signing a user in or reading their session.
///
/// None of these are fatal: handlers recover by treating the browser as
/// logged out and redirecting home.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationError {
    /// The authorization code exchange failed or returned no access token.
    AuthExchange { reason: String },
    /// The profile could not be fetched after a successful exchange.
    ProfileFetch { reason: String },
    /// The session cookie was malformed, expired or tampered with.
    SessionDecode { reason: String },
    /// A downstream API rejected the stored access token.
    UpstreamAuthorizationExpired { status: u16 },
}

impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AuthExchange { reason } => {
                write!(f, "authorization code exchange failed: {reason}")
            }
            Self::ProfileFetch { reason } => {
                write!(f, "profile fetch failed: {reason}")
            }
            Self::SessionDecode { reason } => {
                write!(f, "session cookie could not be decoded: {reason}")
            }
            Self::UpstreamAuthorizationExpired { status } => {
                write!(f, "stored access token rejected upstream (HTTP {status})")
            }
        }
    }
}

impl std::error::Error for AuthenticationError {}

//! OAuth client configuration for Google sign-in.
//!
//! The configuration is built once at startup and then shared read-only by
//! the OAuth client for the lifetime of the process.

use interview_tracker_core::Result;

use crate::error::ConfigurationError;

/// Read-only Google Calendar access, needed to list interview events.
pub const CALENDAR_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/calendar.readonly";

/// Scopes requested on the consent screen: identity plus calendar read.
pub const SIGN_IN_SCOPES: &[&str] = &["openid", "email", "profile", CALENDAR_READONLY_SCOPE];

/// Credentials registered with the identity provider.
///
/// Construction trims every value and rejects blank credentials, so an
/// `OAuthConfig` in hand is always usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthConfig {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl OAuthConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the client id or secret is blank, or
    /// if the redirect URI is blank or not absolute.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let client_id = client_id.into().trim().to_string();
        let client_secret = client_secret.into().trim().to_string();
        let redirect_uri = redirect_uri.into().trim().to_string();

        if client_id.is_empty() {
            return Err(ConfigurationError::MissingClientId.into());
        }
        if client_secret.is_empty() {
            return Err(ConfigurationError::MissingClientSecret.into());
        }
        if !redirect_uri.contains("://") {
            return Err(ConfigurationError::InvalidRedirectUri {
                uri: redirect_uri,
                reason: "expected an absolute URL".to_string(),
            }
            .into());
        }

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
        })
    }

    /// Returns the OAuth client ID.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the OAuth client secret.
    #[must_use]
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Returns the registered callback URL.
    #[must_use]
    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// Returns the space-separated scope string sent to the provider.
    #[must_use]
    pub fn scope(&self) -> String {
        SIGN_IN_SCOPES.join(" ")
    }
}

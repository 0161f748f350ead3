//! Google OAuth 2.0 client for signing users in.
//!
//! Three-legged authorization-code flow:
//! - `authorization_url` builds the consent-screen redirect
//! - `exchange_code` trades the callback code for tokens
//! - `fetch_profile` reads the user's profile with the new access token
//!
//! Callers go through `complete_login`, which runs the last two steps and
//! yields an `Identity` only if both succeed.

use interview_tracker_core::Result;
use interview_tracker_platform_access::{
    AuthenticationError, ConfigurationError, Identity, OAuthConfig, Profile, TokenBundle,
};
use oauth2::{AuthUrl, AuthorizationCode, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use serde::Deserialize;

/// Google OAuth authorization URL.
pub const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Google OAuth token URL.
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Google userinfo URL.
pub const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Provider endpoints. Defaults to Google; tests point these at a fake.
#[derive(Debug, Clone)]
pub struct GoogleEndpoints {
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

impl Default for GoogleEndpoints {
    fn default() -> Self {
        Self {
            auth_url: GOOGLE_AUTH_URL.to_string(),
            token_url: GOOGLE_TOKEN_URL.to_string(),
            userinfo_url: GOOGLE_USERINFO_URL.to_string(),
        }
    }
}

impl GoogleEndpoints {
    /// Endpoints served under a single base URL
    /// (`{base}/o/oauth2/v2/auth`, `{base}/token`, `{base}/userinfo`).
    #[must_use]
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            auth_url: format!("{base}/o/oauth2/v2/auth"),
            token_url: format!("{base}/token"),
            userinfo_url: format!("{base}/userinfo"),
        }
    }
}

/// Token endpoint response, before validation.
#[derive(Debug, Deserialize)]
struct GoogleTokenResponse {
    access_token: Option<String>,
    refresh_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

impl GoogleTokenResponse {
    fn into_tokens(self) -> std::result::Result<TokenBundle, AuthenticationError> {
        match self.access_token.filter(|token| !token.is_empty()) {
            Some(access_token) => Ok(TokenBundle::new(access_token, self.refresh_token)),
            None => {
                let reason = match (self.error, self.error_description) {
                    (Some(error), Some(description)) => format!("{error}: {description}"),
                    (Some(error), None) => error,
                    _ => "no access_token in response".to_string(),
                };
                Err(AuthenticationError::AuthExchange { reason })
            }
        }
    }
}

/// Userinfo response, before mapping onto `Profile`.
///
/// Google names the display name `name` and the avatar `picture`; this is
/// the only place those names appear.
#[derive(Debug, Deserialize)]
struct GoogleUserInfo {
    id: Option<String>,
    name: Option<String>,
    email: Option<String>,
    picture: Option<String>,
}

impl GoogleUserInfo {
    fn into_profile(self) -> std::result::Result<Profile, AuthenticationError> {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AuthenticationError::ProfileFetch {
                reason: "userinfo response has no id".to_string(),
            })?;

        Ok(Profile::new(
            id,
            self.name.unwrap_or_default(),
            self.email.unwrap_or_default(),
            self.picture.unwrap_or_default(),
        ))
    }
}

/// Google sign-in client, built once at startup.
#[derive(Debug, Clone)]
pub struct GoogleOAuthClient {
    client_id: ClientId,
    client_secret: ClientSecret,
    redirect_url: RedirectUrl,
    auth_url: AuthUrl,
    token_url: TokenUrl,
    userinfo_url: String,
    scope: String,
    http_client: reqwest::Client,
}

impl GoogleOAuthClient {
    /// Creates a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the redirect URI or an endpoint is
    /// not a valid URL.
    pub fn new(
        config: &OAuthConfig,
        endpoints: &GoogleEndpoints,
        http_client: reqwest::Client,
    ) -> Result<Self, ConfigurationError> {
        let redirect_url = RedirectUrl::new(config.redirect_uri().to_string()).map_err(|e| {
            ConfigurationError::InvalidRedirectUri {
                uri: config.redirect_uri().to_string(),
                reason: e.to_string(),
            }
        })?;
        let auth_url = AuthUrl::new(endpoints.auth_url.clone())
            .map_err(|e| invalid_endpoint(&endpoints.auth_url, e))?;
        let token_url = TokenUrl::new(endpoints.token_url.clone())
            .map_err(|e| invalid_endpoint(&endpoints.token_url, e))?;

        Ok(Self {
            client_id: ClientId::new(config.client_id().to_string()),
            client_secret: ClientSecret::new(config.client_secret().to_string()),
            redirect_url,
            auth_url,
            token_url,
            userinfo_url: endpoints.userinfo_url.clone(),
            scope: config.scope(),
            http_client,
        })
    }

    /// Builds the consent-screen URL.
    ///
    /// Always asks for offline access so a refresh token is issued, and
    /// forces the account picker so users can switch Google accounts.
    #[must_use]
    pub fn authorization_url(&self) -> String {
        let mut url = self.auth_url.url().clone();
        url.query_pairs_mut()
            .append_pair("client_id", self.client_id.as_str())
            .append_pair("redirect_uri", self.redirect_url.as_str())
            .append_pair("response_type", "code")
            .append_pair("scope", &self.scope)
            .append_pair("access_type", "offline")
            .append_pair("prompt", "select_account");
        url.to_string()
    }

    /// Exchanges an authorization code for tokens.
    ///
    /// Codes are single-use, so this is attempted exactly once.
    pub async fn exchange_code(
        &self,
        code: &AuthorizationCode,
    ) -> std::result::Result<TokenBundle, AuthenticationError> {
        let params = [
            ("code", code.secret().as_str()),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.secret().as_str()),
            ("redirect_uri", self.redirect_url.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http_client
            .post(self.token_url.as_str())
            .form(&params)
            .send()
            .await
            .map_err(|e| AuthenticationError::AuthExchange {
                reason: format!("token request failed: {e}"),
            })?;

        let status = response.status();
        let body: GoogleTokenResponse =
            response
                .json()
                .await
                .map_err(|e| AuthenticationError::AuthExchange {
                    reason: format!("undecodable token response (HTTP {status}): {e}"),
                })?;

        body.into_tokens()
    }

    /// Fetches the signed-in user's profile.
    pub async fn fetch_profile(
        &self,
        access_token: &str,
    ) -> std::result::Result<Profile, AuthenticationError> {
        let response = self
            .http_client
            .get(&self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthenticationError::ProfileFetch {
                reason: format!("userinfo request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthenticationError::ProfileFetch {
                reason: format!("userinfo returned HTTP {status}"),
            });
        }

        let info: GoogleUserInfo =
            response
                .json()
                .await
                .map_err(|e| AuthenticationError::ProfileFetch {
                    reason: format!("undecodable userinfo response: {e}"),
                })?;

        info.into_profile()
    }

    /// Runs the callback half of the flow: code exchange, then profile fetch.
    ///
    /// The profile endpoint is never called if the exchange fails, and no
    /// `Identity` exists unless both steps succeed.
    #[tracing::instrument(skip_all)]
    pub async fn complete_login(
        &self,
        code: &str,
    ) -> std::result::Result<Identity, AuthenticationError> {
        let tokens = self
            .exchange_code(&AuthorizationCode::new(code.to_string()))
            .await?;
        let profile = self.fetch_profile(tokens.access_token()).await?;

        tracing::info!(user_id = %profile.id(), "Google sign-in completed");
        Ok(Identity::from_login(tokens, profile))
    }
}

fn invalid_endpoint(endpoint: &str, error: impl std::fmt::Display) -> ConfigurationError {
    ConfigurationError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: error.to_string(),
    }
}

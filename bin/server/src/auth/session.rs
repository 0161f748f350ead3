//! Encrypted cookie sessions.
//!
//! The whole `Identity` lives in the cookie, encrypted and authenticated with
//! a key derived from the configured secret. There is no server-side session
//! table; ending a session just expires the cookie.

use axum::http::{HeaderMap, HeaderValue, header::SET_COOKIE};
use axum::response::IntoResponse;
use axum_extra::extract::cookie::{Cookie, CookieJar, Key, PrivateCookieJar, SameSite};
use interview_tracker_platform_access::{AuthenticationError, Identity};
use sha2::{Digest, Sha512};
use std::fmt;

use crate::config::SessionConfig;
use crate::error::SessionError;

/// Binds identities to browser sessions.
#[derive(Clone)]
pub struct SessionBinder {
    key: Key,
    cookie_name: String,
    secure: bool,
    max_age: time::Duration,
}

impl fmt::Debug for SessionBinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionBinder")
            .field("cookie_name", &self.cookie_name)
            .field("secure", &self.secure)
            .field("max_age", &self.max_age)
            .finish_non_exhaustive()
    }
}

impl SessionBinder {
    /// Creates a binder whose key is derived from the trimmed `config.secret`.
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        // SHA-512 yields exactly the 64 bytes `Key::from` needs, whatever the secret length.
        let key = Key::from(Sha512::digest(config.secret.trim().as_bytes()).as_slice());
        Self {
            key,
            cookie_name: config.cookie_name.clone(),
            secure: config.secure_cookies,
            max_age: config.max_age(),
        }
    }

    /// Returns the session cookie name.
    #[must_use]
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Stores `identity` in the request's session.
    ///
    /// Returns the `Set-Cookie` value to attach to the response. Anything
    /// previously in the session is replaced; an unreadable session is
    /// treated as empty.
    pub fn bind_identity(
        &self,
        headers: &HeaderMap,
        identity: &Identity,
    ) -> Result<HeaderValue, SessionError> {
        let value = serde_json::to_string(identity).map_err(|e| SessionError::Encode {
            details: e.to_string(),
        })?;

        let cookie = Cookie::build((self.cookie_name.clone(), value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(self.max_age)
            .build();

        let response = PrivateCookieJar::<Key>::from_headers(headers, self.key.clone())
            .add(cookie)
            .into_response();

        response
            .headers()
            .get(SET_COOKIE)
            .cloned()
            .ok_or_else(|| SessionError::Encode {
                details: "cookie jar produced no Set-Cookie header".to_string(),
            })
    }

    /// Reads the identity bound to the request's session, if any.
    ///
    /// A missing, tampered or undecodable cookie all mean "not signed in".
    #[must_use]
    pub fn current_user(&self, headers: &HeaderMap) -> Option<Identity> {
        let jar = PrivateCookieJar::<Key>::from_headers(headers, self.key.clone());
        let Some(cookie) = jar.get(&self.cookie_name) else {
            if CookieJar::from_headers(headers).get(&self.cookie_name).is_some() {
                tracing::debug!(
                    cookie = %self.cookie_name,
                    "session cookie failed authentication"
                );
            }
            return None;
        };

        match serde_json::from_str::<Identity>(cookie.value()) {
            Ok(identity) => Some(identity),
            Err(e) => {
                let error = AuthenticationError::SessionDecode {
                    reason: e.to_string(),
                };
                tracing::debug!(%error, "ignoring session");
                None
            }
        }
    }

    /// Returns a `Set-Cookie` value that clears the session.
    pub fn end_session(&self) -> Result<HeaderValue, SessionError> {
        let cookie = Cookie::build((self.cookie_name.clone(), ""))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(time::Duration::ZERO)
            .build();

        HeaderValue::from_str(&cookie.to_string()).map_err(|e| SessionError::Encode {
            details: e.to_string(),
        })
    }
}

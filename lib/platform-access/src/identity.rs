//! The signed-in identity stored in a browser's session cookie.
//!
//! An `Identity` pairs the provider tokens with the user's profile. The
//! server never keeps its own copy; the encrypted cookie is the only store.

use serde::{Deserialize, Serialize};

/// Tokens obtained by exchanging an authorization code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBundle {
    access_token: String,
    refresh_token: Option<String>,
}

impl TokenBundle {
    /// Creates a token bundle.
    #[must_use]
    pub fn new(access_token: String, refresh_token: Option<String>) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }

    /// Returns the bearer token used for provider API calls.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns the refresh token, if the provider issued one.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }
}

/// Canonical user profile, keyed by the provider-issued id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    id: String,
    display_name: String,
    email: String,
    photo_url: String,
}

impl Profile {
    /// Creates a profile.
    #[must_use]
    pub fn new(id: String, display_name: String, email: String, photo_url: String) -> Self {
        Self {
            id,
            display_name,
            email,
            photo_url,
        }
    }

    /// Returns the provider-issued user id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the user's display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the user's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the URL of the user's avatar.
    #[must_use]
    pub fn photo_url(&self) -> &str {
        &self.photo_url
    }
}

/// Session payload: tokens plus profile.
///
/// Only built from a completed login (exchange and profile fetch both
/// succeeded) or decoded back out of a session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    access_token: String,
    refresh_token: Option<String>,
    profile: Profile,
}

impl Identity {
    /// Combines the results of a completed login.
    #[must_use]
    pub fn from_login(tokens: TokenBundle, profile: Profile) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            profile,
        }
    }

    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Returns true if `user_id` is this identity's profile id.
    #[must_use]
    pub fn owns(&self, user_id: &str) -> bool {
        self.profile.id == user_id
    }
}

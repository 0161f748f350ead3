//! Platform access for interview-tracker.
//!
//! This crate provides:
//! - OAuth client configuration (`OAuthConfig`), validated at startup
//! - The session-resident `Identity` and its parts (`TokenBundle`, `Profile`)
//! - Authentication error types
//!
//! # Example
//!
//! ```
//! use interview_tracker_platform_access::{Identity, OAuthConfig, Profile, TokenBundle};
//!
//! let config = OAuthConfig::new(
//!     "client-id",
//!     "client-secret",
//!     "http://localhost:5173/auth/google/callback",
//! )
//! .expect("credentials are present");
//! assert_eq!(config.client_id(), "client-id");
//!
//! let identity = Identity::from_login(
//!     TokenBundle::new("tok1".to_string(), Some("ref1".to_string())),
//!     Profile::new(
//!         "u1".to_string(),
//!         "Ada".to_string(),
//!         "ada@x.com".to_string(),
//!         "http://p/ada.png".to_string(),
//!     ),
//! );
//! assert_eq!(identity.profile().id(), "u1");
//! ```

pub mod error;
pub mod identity;
pub mod oauth;

pub use error::{AuthenticationError, ConfigurationError};
pub use identity::{Identity, Profile, TokenBundle};
pub use oauth::{CALENDAR_READONLY_SCOPE, OAuthConfig, SIGN_IN_SCOPES};

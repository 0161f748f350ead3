//! interview-tracker web server.
//!
//! Signs users in with Google, keeps their identity in an encrypted session
//! cookie, and serves their job applications and calendar interviews.

pub mod app;
pub mod auth;
pub mod calendar;
pub mod config;
pub mod db;
pub mod error;
pub mod routes;

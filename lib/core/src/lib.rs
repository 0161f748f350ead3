//! Core types shared by every interview-tracker crate.
//!
//! This crate provides the rootcause-based `Result` alias and the
//! strongly-typed identifiers for rows owned by the tracker.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{ApplicationId, NoteId, ParseIdError};

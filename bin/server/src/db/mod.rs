//! Database repositories for the interview tracker.
//!
//! Every query is scoped by the owner's profile id; a row belonging to
//! another user behaves as if it does not exist.

pub mod application;
pub mod note;

pub use application::ApplicationRepository;
pub use note::NoteRepository;

/// Wraps a row that failed domain validation as a decode error.
fn decode_error(message: String) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        message,
    )))
}

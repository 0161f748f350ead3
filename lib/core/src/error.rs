//! Error handling foundation for interview-tracker.
//!
//! Only the `Result` alias lives here. Each crate defines its own error
//! types and wraps them in a rootcause `Report` as they propagate.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_alias_defaults_context() {
        let ok: Result<&str> = Ok("tracked");
        assert_eq!(ok.expect("should be ok"), "tracked");
    }
}

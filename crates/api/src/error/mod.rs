//! Error handling for the pairing library

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

// Implement standard Error trait when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context_keeps_lengths() {
        let err = Error::InvalidLength {
            context: "inner",
            expected: 73,
            actual: 72,
        }
        .with_context("G1 decoding");

        assert_eq!(
            err,
            Error::InvalidLength {
                context: "G1 decoding",
                expected: 73,
                actual: 72,
            }
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_display_invalid_point() {
        let err = Error::InvalidPoint {
            context: "inner",
            message: "stale".into(),
        }
        .with_context("G2 decoding");
        assert_eq!(err.to_string(), "Invalid point: G2 decoding");

        let err = err.with_message("not on curve");
        assert_eq!(err.to_string(), "Invalid point: G2 decoding: not on curve");
    }

    #[test]
    fn test_result_ext_context() {
        let r: core::result::Result<(), Error> = Err(Error::InvalidLength {
            context: "inner",
            expected: 80,
            actual: 79,
        });
        match r.with_context("Scalar decoding") {
            Err(Error::InvalidLength { context, .. }) => assert_eq!(context, "Scalar decoding"),
            other => panic!("unexpected {:?}", other),
        }

        let r: core::result::Result<(), Error> = Err(Error::InvalidLength {
            context: "inner",
            expected: 80,
            actual: 79,
        });
        let mapped: core::result::Result<(), &str> = r.wrap_err(|| "rejected");
        assert_eq!(mapped, Err("rejected"));
    }
}

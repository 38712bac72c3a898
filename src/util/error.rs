use thiserror::Error;

/// Error type for olc-rs operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OlcError {
    /// Latitude or longitude is NaN or infinite.
    #[error("Invalid coordinate: ({0}, {1})")]
    InvalidCoordinate(f64, f64),
    /// Requested code length is below 2, odd below 10, or above 15.
    #[error("Invalid code length: {0}")]
    InvalidCodeLength(usize),
    /// Malformed character set, separator or padding.
    #[error("Invalid code: {0}")]
    InvalidCode(String),
    /// A short code was passed to `decode` without being recovered first.
    #[error("Short code cannot be decoded without a reference point: {0}")]
    ShortCodeDecodeRejected(String),
    /// `recover_nearest` was given something other than a valid short code.
    #[error("Code is not a recoverable short code: {0}")]
    NotRecoverable(String),
    /// No leading digits can be dropped safely for the given reference point.
    #[error("No prefix of {0} can be removed near the reference point")]
    UnshortenableCode(String),
}

use math::error::MathError;
use thiserror::Error;

/// Result type specialized for secret sharing operations.
pub type Result<T, E = SharingError> = std::result::Result<T, E>;

/// Errors that can arise while splitting or recovering a secret.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SharingError {
    #[error(
        "Invalid parameters: threshold {threshold} with {share_count} shares (need 1 <= threshold <= shares)"
    )]
    InvalidParameters {
        threshold: usize,
        share_count: usize,
    },
    #[error(
        "Cannot issue {share_count} shares: x-coordinates 1..={share_count} must stay below the modulus"
    )]
    TooManyShares { share_count: usize },
    #[error("Secret does not fit in the field: it must be smaller than the modulus")]
    SecretOutOfRange,
    #[error("Share y-value {0} is not smaller than the modulus")]
    ShareOutOfRange(String),
    #[error("Insufficient shares: need {required}, got {provided}")]
    InsufficientShares { required: usize, provided: usize },
    #[error("No modular inverse: two shares have the same x-coordinate")]
    NoInverse,
    #[error(
        "Invalid share index: {0}, x-coordinates congruent to 0 are reserved for the secret"
    )]
    InvalidShareIndex(String),
    #[error("Cannot parse share {0:?}: expected `x,y`")]
    ParseShare(String),
    #[error("Got {points} points but {shares} share values")]
    PointsSharesMismatch { points: usize, shares: usize },
    #[error(transparent)]
    Math(MathError),
}

impl From<MathError> for SharingError {
    fn from(value: MathError) -> Self {
        match value {
            MathError::NoInverse => SharingError::NoInverse,
            other => SharingError::Math(other),
        }
    }
}

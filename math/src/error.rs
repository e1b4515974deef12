use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type for prime-field arithmetic, prime generation and
/// polynomial operations.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error("modulus must be at least 2, got {0}")]
    InvalidModulus(String),
    #[error("modulus {0} is not prime")]
    NotPrime(String),
    #[error("multiplicative inverse of zero does not exist")]
    NoInverse,
    #[error("prime bit length must be at least 2, got {0}")]
    InvalidBitLength(u64),
    #[error("polynomial must have at least one coefficient")]
    EmptyPolynomial,
    #[error("interpolation requires at least one point")]
    EmptyInterpolation,
    #[error("got {xs} x-coordinates but {ys} y-coordinates")]
    LengthMismatch { xs: usize, ys: usize },
    #[error(transparent)]
    ParseInteger(#[from] num_bigint::ParseBigIntError),
}

pub type Error = MathError;

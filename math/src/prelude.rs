pub use crate::{biguint, biguint_vec};
pub use crate::{
    constants::{DEFAULT_PRIME_BITS, MILLER_RABIN_ROUNDS},
    error::MathError,
    field::PrimeField,
    interpolation::{interpolate_at, interpolate_at_zero},
    poly::Polynomial,
    prime::{generate_prime, is_probable_prime},
    traits::SecureRng,
};
pub use num_bigint::BigUint;

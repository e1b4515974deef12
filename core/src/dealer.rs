use math::{field::PrimeField, poly::Polynomial, traits::SecureRng};
use num_bigint::BigUint;

use crate::error::{Result, SharingError};
use crate::params::SharingParams;
use crate::share::Share;

/// Split `secret` into `params.share_count()` shares, any
/// `params.threshold()` of which recover it.
///
/// Shares are issued at x = 1, 2, ..., n. The sharing polynomial is dropped
/// before returning. Fails without consuming randomness when the secret or
/// the share indices do not fit in the field.
pub fn deal<R>(
    secret: &BigUint,
    params: &SharingParams,
    field: &PrimeField,
    rng: &mut R,
) -> Result<Vec<Share>>
where
    R: SecureRng + ?Sized,
{
    if !field.contains(secret) {
        return Err(SharingError::SecretOutOfRange);
    }
    let share_count = params.share_count();
    if !field.contains(&BigUint::from(share_count)) {
        return Err(SharingError::TooManyShares { share_count });
    }

    let polynomial =
        Polynomial::random_with_constant(secret, params.threshold(), field, rng)?;

    (1..=share_count)
        .map(|x| {
            let x = BigUint::from(x);
            let y = polynomial.evaluate(&x, field);
            Share::new(x, y)
        })
        .collect()
}

//! Entry points taking and returning plain integers, for callers that keep
//! share coordinates in two parallel lists.

use math::{field::PrimeField, traits::SecureRng};
use num_bigint::BigUint;

use crate::dealer::deal;
use crate::error::{Result, SharingError};
use crate::params::SharingParams;
use crate::recovery::recover;
use crate::share::Share;

/// Split `secret` into `num_shares` shares over GF(`prime`).
///
/// Returns `(points, shares)`; `points[i]` and `shares[i]` together form
/// share `i`. Parameters are validated before any randomness is drawn.
pub fn share_secret<R>(
    secret: &BigUint,
    threshold: usize,
    num_shares: usize,
    prime: &BigUint,
    rng: &mut R,
) -> Result<(Vec<BigUint>, Vec<BigUint>)>
where
    R: SecureRng + ?Sized,
{
    let params = SharingParams::new(threshold, num_shares)?;
    let field = PrimeField::new(prime.clone())?;

    Ok(deal(secret, &params, &field, rng)?
        .into_iter()
        .map(Share::into_parts)
        .unzip())
}

/// Recover the secret from parallel `points` / `shares` lists, using the
/// first `threshold` pairs.
pub fn recover_secret(
    points: &[BigUint],
    shares: &[BigUint],
    threshold: usize,
    prime: &BigUint,
) -> Result<BigUint> {
    if points.len() != shares.len() {
        return Err(SharingError::PointsSharesMismatch {
            points: points.len(),
            shares: shares.len(),
        });
    }

    let field = PrimeField::new(prime.clone())?;
    let shares = points
        .iter()
        .zip(shares)
        .map(|(x, y)| Share::new(x.clone(), y.clone()))
        .collect::<Result<Vec<_>>>()?;

    recover(&shares, threshold, &field)
}

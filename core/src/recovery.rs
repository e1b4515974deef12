use math::{field::PrimeField, interpolation::interpolate_at_zero};
use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{Result, SharingError};
use crate::share::Share;

/// Reconstruct the secret from the first `threshold` of `shares`.
///
/// Extra shares beyond the threshold are ignored. Any subset of a dealing
/// recovers the same value, in any order. Two shares with the same
/// x-coordinate fail with [`SharingError::NoInverse`].
pub fn recover(
    shares: &[Share],
    threshold: usize,
    field: &PrimeField,
) -> Result<BigUint> {
    if threshold == 0 {
        return Err(SharingError::InvalidParameters {
            threshold,
            share_count: shares.len(),
        });
    }
    if shares.len() < threshold {
        return Err(SharingError::InsufficientShares {
            required: threshold,
            provided: shares.len(),
        });
    }

    let active = &shares[..threshold];
    if let Some(share) = active.iter().find(|s| !field.contains(s.y())) {
        return Err(SharingError::ShareOutOfRange(share.y().to_string()));
    }

    let xs: Vec<BigUint> = active.iter().map(|s| field.reduce(s.x())).collect();
    // x ≡ 0 (mod p) would evaluate at the secret's own point
    if let Some(i) = xs.iter().position(Zero::is_zero) {
        return Err(SharingError::InvalidShareIndex(active[i].x().to_string()));
    }
    let ys: Vec<BigUint> = active.iter().map(|s| s.y().clone()).collect();

    Ok(interpolate_at_zero(&xs, &ys, field)?)
}

use math::{field::PrimeField, traits::SecureRng};
use num_bigint::BigUint;

use crate::dealer::deal;
use crate::error::Result;
use crate::params::SharingParams;
use crate::recovery::recover;
use crate::share::Share;

/// A `threshold`-of-`share_count` Shamir configuration over one prime field.
///
/// Holds no secret material, so one scheme can serve any number of
/// independent dealings, from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShamirScheme {
    params: SharingParams,
    field: PrimeField,
}

impl ShamirScheme {
    pub fn new(
        threshold: usize,
        share_count: usize,
        field: PrimeField,
    ) -> Result<Self> {
        let params = SharingParams::new(threshold, share_count)?;
        Ok(Self { params, field })
    }

    pub fn with_params(params: SharingParams, field: PrimeField) -> Self {
        Self { params, field }
    }

    #[inline]
    pub fn threshold(&self) -> usize {
        self.params.threshold()
    }

    #[inline]
    pub fn share_count(&self) -> usize {
        self.params.share_count()
    }

    #[inline]
    pub fn params(&self) -> &SharingParams {
        &self.params
    }

    #[inline]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Split `secret` into shares at x = 1..=share_count.
    pub fn split_secret<R>(
        &self,
        secret: &BigUint,
        rng: &mut R,
    ) -> Result<Vec<Share>>
    where
        R: SecureRng + ?Sized,
    {
        deal(secret, &self.params, &self.field, rng)
    }

    /// Reconstruct the secret from the first `threshold` shares.
    pub fn reconstruct_secret(&self, shares: &[Share]) -> Result<BigUint> {
        recover(shares, self.params.threshold(), &self.field)
    }
}

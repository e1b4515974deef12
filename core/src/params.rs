use crate::error::{Result, SharingError};

pub use math::constants::{DEFAULT_PRIME_BITS, MILLER_RABIN_ROUNDS};

/// Check the `1 <= threshold <= share_count` relation.
pub fn validate_threshold_config(threshold: usize, share_count: usize) -> bool {
    (1..=share_count).contains(&threshold)
}

/// Threshold and share count of one sharing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SharingParams {
    threshold: usize,
    share_count: usize,
}

impl SharingParams {
    pub fn new(threshold: usize, share_count: usize) -> Result<Self> {
        if !validate_threshold_config(threshold, share_count) {
            return Err(SharingError::InvalidParameters {
                threshold,
                share_count,
            });
        }

        Ok(Self {
            threshold,
            share_count,
        })
    }

    #[inline]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    #[inline]
    pub fn share_count(&self) -> usize {
        self.share_count
    }
}

//! Probabilistic prime generation for the field modulus.

use num_bigint::BigUint;
use num_bigint::RandBigInt;
use num_traits::One;
use num_traits::Zero;

use crate::constants::{MILLER_RABIN_ROUNDS, SMALL_PRIMES};
use crate::error::{MathError, Result};
use crate::traits::SecureRng;

/// Miller-Rabin test with `rounds` random witnesses, preceded by trial
/// division by [`SMALL_PRIMES`].
///
/// A `false` answer is always correct. A `true` answer is wrong with
/// probability at most `4^-rounds`.
pub fn is_probable_prime<R>(
    candidate: &BigUint,
    rounds: usize,
    rng: &mut R,
) -> bool
where
    R: SecureRng + ?Sized,
{
    let two = BigUint::from(2u32);
    if candidate < &two {
        return false;
    }

    for &small in SMALL_PRIMES.iter() {
        let small = BigUint::from(small);
        if candidate == &small {
            return true;
        }
        if (candidate % &small).is_zero() {
            return false;
        }
    }

    // candidate > 97 and odd from here on
    let n_minus_one = candidate - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, candidate);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, candidate);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

/// Generate a probable prime of exactly `bits` bits.
///
/// Candidates are drawn with the top bit forced so the result always has the
/// requested length, and with the low bit forced so only odd numbers are
/// tested.
pub fn generate_prime<R>(bits: u64, rng: &mut R) -> Result<BigUint>
where
    R: SecureRng + ?Sized,
{
    if bits < 2 {
        return Err(MathError::InvalidBitLength(bits));
    }

    let top = BigUint::one() << (bits - 1);
    loop {
        let candidate = rng.gen_biguint(bits) | &top | BigUint::one();
        if is_probable_prime(&candidate, MILLER_RABIN_ROUNDS, rng) {
            return Ok(candidate);
        }
    }
}

//! Shared constants for prime generation and primality testing.

/// Bit length of the modulus used when the caller does not pick one.
pub const DEFAULT_PRIME_BITS: u64 = 128;

/// Miller-Rabin rounds; a composite survives all of them with probability
/// at most 4^-64 = 2^-128.
pub const MILLER_RABIN_ROUNDS: usize = 64;

/// Primes used for trial division before running Miller-Rabin.
pub const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
    73, 79, 83, 89, 97,
];

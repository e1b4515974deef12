use rand::CryptoRng;
use rand::RngCore;

/// Source of randomness accepted by every operation that consumes entropy.
///
/// Coefficients and Miller-Rabin witnesses must be unpredictable, so only
/// generators marked [`CryptoRng`] qualify. Tests pass a seeded
/// `ChaCha20Rng`; production callers pass `OsRng` or `thread_rng()`.
pub trait SecureRng: RngCore + CryptoRng {}

impl<T> SecureRng for T where T: RngCore + CryptoRng + ?Sized {}

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_bigint::RandBigInt;
use num_traits::One;
use num_traits::Zero;
use serde::Deserialize;
use serde::Serialize;

use crate::constants::MILLER_RABIN_ROUNDS;
use crate::error::{MathError, Result};
use crate::prime::is_probable_prime;
use crate::traits::SecureRng;

/// The prime field ℤ_p for a modulus chosen at runtime.
///
/// Elements are plain [`BigUint`]s. Every operation accepts operands of any
/// magnitude and returns the canonical representative in `[0, p)`.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BigUint", into = "BigUint")]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    /// Wrap `modulus` without testing it for primality.
    ///
    /// Use [`PrimeField::new_checked`] for a modulus that did not come from
    /// [`generate_prime`](crate::prime::generate_prime).
    pub fn new(modulus: BigUint) -> Result<Self> {
        if modulus < BigUint::from(2u32) {
            return Err(MathError::InvalidModulus(modulus.to_string()));
        }

        Ok(Self { modulus })
    }

    /// Wrap `modulus` after it passes the Miller-Rabin test.
    pub fn new_checked<R>(modulus: BigUint, rng: &mut R) -> Result<Self>
    where
        R: SecureRng + ?Sized,
    {
        let field = Self::new(modulus)?;
        if !is_probable_prime(&field.modulus, MILLER_RABIN_ROUNDS, rng) {
            return Err(MathError::NotPrime(field.modulus.to_string()));
        }
        Ok(field)
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Number of significant bits of the modulus.
    #[inline]
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Whether `value` is already a canonical element, i.e. `value < p`.
    #[inline]
    pub fn contains(&self, value: &BigUint) -> bool {
        value < &self.modulus
    }

    #[inline]
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    /// The canonical element congruent to `value`.
    pub fn element(&self, value: u64) -> BigUint {
        BigUint::from(value) % &self.modulus
    }

    pub fn zero(&self) -> BigUint {
        BigUint::zero()
    }

    pub fn one(&self) -> BigUint {
        BigUint::one() % &self.modulus
    }

    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        // a + p - b never underflows once both sides are reduced.
        (self.reduce(a) + &self.modulus - self.reduce(b)) % &self.modulus
    }

    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    pub fn neg(&self, a: &BigUint) -> BigUint {
        (&self.modulus - self.reduce(a)) % &self.modulus
    }

    /// Multiplicative inverse, failing with [`MathError::NoInverse`] when
    /// `a ≡ 0 (mod p)`.
    pub fn inverse(&self, a: &BigUint) -> Result<BigUint> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Err(MathError::NoInverse);
        }
        a.modinv(&self.modulus).ok_or(MathError::NoInverse)
    }

    pub fn div(&self, a: &BigUint, b: &BigUint) -> Result<BigUint> {
        Ok(self.mul(a, &self.inverse(b)?))
    }

    pub fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, &self.modulus)
    }

    /// Draw a uniformly distributed element of `[0, p)`.
    pub fn random_element<R>(&self, rng: &mut R) -> BigUint
    where
        R: SecureRng + ?Sized,
    {
        rng.gen_biguint_below(&self.modulus)
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.modulus)
    }
}

impl FromStr for PrimeField {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let modulus: BigUint = s.trim().parse()?;
        Self::new(modulus)
    }
}

impl TryFrom<BigUint> for PrimeField {
    type Error = MathError;

    fn try_from(modulus: BigUint) -> Result<Self, Self::Error> {
        Self::new(modulus)
    }
}

impl From<PrimeField> for BigUint {
    fn from(field: PrimeField) -> Self {
        field.modulus
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use test_strategy::proptest;

    use super::*;

    const P128: &str = "340282366920938463463374607431768211297";

    fn small() -> PrimeField {
        PrimeField::new(BigUint::from(17u32)).unwrap()
    }

    fn large() -> PrimeField {
        P128.parse().unwrap()
    }

    fn big(value: u128) -> BigUint {
        BigUint::from(value)
    }

    #[test]
    fn rejects_degenerate_moduli() {
        assert!(matches!(
            PrimeField::new(BigUint::zero()),
            Err(MathError::InvalidModulus(_))
        ));
        assert!(matches!(
            PrimeField::new(BigUint::one()),
            Err(MathError::InvalidModulus(_))
        ));
        assert!(PrimeField::new(big(2)).is_ok());
    }

    #[test]
    fn new_checked_rejects_composites() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        assert!(matches!(
            PrimeField::new_checked(big(221), &mut rng),
            Err(MathError::NotPrime(_))
        ));
        assert!(PrimeField::new_checked(big(223), &mut rng).is_ok());
        assert!(PrimeField::new_checked(large().modulus().clone(), &mut rng)
            .is_ok());

        // 83 * 4969 * 71569 * 7058701842385246401244627777
        let composite: BigUint =
            "208351617316091241234326746312124448251".parse().unwrap();
        assert!(matches!(
            PrimeField::new_checked(composite, &mut rng),
            Err(MathError::NotPrime(_))
        ));
    }

    #[test]
    fn parse_and_display() {
        let field = large();
        assert_eq!(field.to_string(), P128);
        assert_eq!(field.bits(), 128);
        assert!(" 17 ".parse::<PrimeField>().is_ok());
        assert!(matches!(
            "seventeen".parse::<PrimeField>(),
            Err(MathError::ParseInteger(_))
        ));
    }

    #[test]
    fn add_sub_wrap_around() {
        let f = small();
        assert_eq!(f.add(&big(16), &big(4)), big(3));
        assert_eq!(f.sub(&big(3), &big(4)), big(16));
        assert_eq!(f.sub(&big(4), &big(4)), big(0));
        assert_eq!(f.mul(&big(5), &big(7)), big(1));
    }

    #[test]
    fn operations_accept_unreduced_operands() {
        let f = small();
        assert_eq!(f.add(&big(40), &big(40)), big(12));
        assert_eq!(f.sub(&big(1), &big(35)), big(0));
        assert_eq!(f.sub(&big(2), &big(100)), big(4));
        assert_eq!(f.neg(&big(35)), big(16));
    }

    #[test]
    fn neg_stays_canonical() {
        let f = small();
        assert_eq!(f.neg(&big(0)), big(0));
        assert_eq!(f.neg(&big(17)), big(0));
        assert_eq!(f.neg(&big(1)), big(16));
        assert_eq!(f.add(&f.neg(&big(5)), &big(5)), big(0));
    }

    #[test]
    fn inverse_of_zero_fails() {
        let f = small();
        assert_eq!(f.inverse(&big(0)), Err(MathError::NoInverse));
        assert_eq!(f.inverse(&big(34)), Err(MathError::NoInverse));
        assert_eq!(f.div(&big(3), &big(0)), Err(MathError::NoInverse));
    }

    #[test]
    fn inverse_small_field_exhaustive() {
        let f = small();
        for a in 1..17u128 {
            let inv = f.inverse(&big(a)).unwrap();
            assert_eq!(f.mul(&big(a), &inv), big(1), "a = {a}");
        }
    }

    #[test]
    fn pow_matches_fermat() {
        let f = large();
        let a = big(123_456_789);
        let p_minus_one = f.modulus() - 1u32;
        assert_eq!(f.pow(&a, &p_minus_one), BigUint::one());
        let p_minus_two = f.modulus() - 2u32;
        assert_eq!(f.pow(&a, &p_minus_two), f.inverse(&a).unwrap());
    }

    #[test]
    fn random_elements_are_canonical() {
        let f = small();
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        for _ in 0..200 {
            assert!(f.contains(&f.random_element(&mut rng)));
        }
    }

    #[test]
    fn serde_uses_the_modulus() {
        let f = large();
        let value: BigUint = f.clone().into();
        assert_eq!(PrimeField::try_from(value).unwrap(), f);
        assert!(PrimeField::try_from(BigUint::one()).is_err());
    }

    #[proptest]
    fn add_then_sub_is_identity(a: u128, b: u128) {
        let f = large();
        let (a, b) = (big(a), big(b));
        prop_assert_eq!(f.sub(&f.add(&a, &b), &b), f.reduce(&a));
    }

    #[proptest]
    fn results_are_reduced(a: u128, b: u128) {
        let f = large();
        let (a, b) = (big(a) * big(a), big(b) * big(b));
        prop_assert!(f.contains(&f.add(&a, &b)));
        prop_assert!(f.contains(&f.sub(&a, &b)));
        prop_assert!(f.contains(&f.mul(&a, &b)));
        prop_assert!(f.contains(&f.neg(&a)));
    }

    #[proptest]
    fn mul_by_inverse_is_one(#[strategy(1u128..)] a: u128) {
        let f = large();
        let a = big(a);
        prop_assume!(!f.reduce(&a).is_zero());
        let inv = f.inverse(&a).unwrap();
        prop_assert_eq!(f.mul(&a, &inv), BigUint::one());
    }

    #[proptest]
    fn mul_is_commutative_and_distributes(a: u128, b: u128, c: u128) {
        let f = large();
        let (a, b, c) = (big(a), big(b), big(c));
        prop_assert_eq!(f.mul(&a, &b), f.mul(&b, &a));
        prop_assert_eq!(
            f.mul(&a, &f.add(&b, &c)),
            f.add(&f.mul(&a, &b), &f.mul(&a, &c))
        );
    }
}

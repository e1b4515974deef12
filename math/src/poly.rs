//! Polynomials over a runtime prime field.
//!
//! A sharing polynomial carries the secret as its constant term and random
//! coefficients everywhere else. Anyone holding it can recompute every share,
//! so the type is neither `Clone` nor serializable, and its
//! `Debug` output hides the coefficients.
use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{MathError, Result};
use crate::field::PrimeField;
use crate::traits::SecureRng;

/// Coefficients in ascending order of degree; index 0 is the constant term.
pub struct Polynomial {
    coefficients: Vec<BigUint>,
}

impl Polynomial {
    /// Build a polynomial from explicit coefficients, reducing each one into
    /// the field.
    pub fn from_coefficients(
        coefficients: Vec<BigUint>,
        field: &PrimeField,
    ) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(MathError::EmptyPolynomial);
        }

        let coefficients = coefficients
            .into_iter()
            .map(|c| field.reduce(&c))
            .collect();
        Ok(Self { coefficients })
    }

    /// Random polynomial of degree `threshold - 1` whose constant term is
    /// `constant`. Draws `threshold - 1` uniform field elements from `rng`.
    pub fn random_with_constant<R>(
        constant: &BigUint,
        threshold: usize,
        field: &PrimeField,
        rng: &mut R,
    ) -> Result<Self>
    where
        R: SecureRng + ?Sized,
    {
        if threshold == 0 {
            return Err(MathError::EmptyPolynomial);
        }

        let coefficients: Vec<BigUint> = std::iter::once(field.reduce(constant))
            .chain((1..threshold).map(|_| field.random_element(rng)))
            .collect();
        Ok(Self { coefficients })
    }

    /// Evaluate at `x` with Horner's method.
    pub fn evaluate(&self, x: &BigUint, field: &PrimeField) -> BigUint {
        let x = field.reduce(x);
        self.coefficients
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, coeff| {
                field.add(&field.mul(&acc, &x), coeff)
            })
    }

    #[inline]
    pub fn constant_term(&self) -> &BigUint {
        &self.coefficients[0]
    }

    /// Number of coefficients, i.e. the threshold the polynomial was built for.
    #[inline]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Degree of the polynomial, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.iter().rposition(|c| !c.is_zero())
    }

    #[cfg(test)]
    pub(crate) fn coefficients(&self) -> &[BigUint] {
        &self.coefficients
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("len", &self.coefficients.len())
            .finish_non_exhaustive()
    }
}

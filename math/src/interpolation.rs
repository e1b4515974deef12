//! Lagrange interpolation over a prime field.

use num_bigint::BigUint;
use num_traits::One;
use num_traits::Zero;

use crate::error::{MathError, Result};
use crate::field::PrimeField;

fn check_points(xs: &[BigUint], ys: &[BigUint]) -> Result<()> {
    if xs.len() != ys.len() {
        return Err(MathError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    if xs.is_empty() {
        return Err(MathError::EmptyInterpolation);
    }
    Ok(())
}

/// Evaluate at `at` the unique polynomial of degree `< xs.len()` passing
/// through every `(xs[i], ys[i])`.
///
/// Each basis term is `y_i * Π_{j≠i} (at - x_j) / (x_i - x_j)`. Two
/// x-coordinates congruent modulo p make a denominator vanish and fail with
/// [`MathError::NoInverse`].
pub fn interpolate_at(
    xs: &[BigUint],
    ys: &[BigUint],
    at: &BigUint,
    field: &PrimeField,
) -> Result<BigUint> {
    check_points(xs, ys)?;

    let mut result = BigUint::zero();
    for (i, (x_i, y_i)) in xs.iter().zip(ys).enumerate() {
        let mut numerator = BigUint::one();
        let mut denominator = BigUint::one();
        for (j, x_j) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = field.mul(&numerator, &field.sub(at, x_j));
            denominator = field.mul(&denominator, &field.sub(x_i, x_j));
        }

        let basis = field.div(&numerator, &denominator)?;
        result = field.add(&result, &field.mul(y_i, &basis));
    }

    Ok(result)
}

/// Recover the constant term of the interpolating polynomial.
///
/// Same as [`interpolate_at`] at zero, where each numerator factor reduces to
/// the negated x-coordinate.
pub fn interpolate_at_zero(
    xs: &[BigUint],
    ys: &[BigUint],
    field: &PrimeField,
) -> Result<BigUint> {
    check_points(xs, ys)?;

    let mut secret = BigUint::zero();
    for (i, (x_i, y_i)) in xs.iter().zip(ys).enumerate() {
        let (numerator, denominator) = xs
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold(
                (BigUint::one(), BigUint::one()),
                |(num, den), (_, x_j)| {
                    (
                        field.mul(&num, &field.neg(x_j)),
                        field.mul(&den, &field.sub(x_i, x_j)),
                    )
                },
            );

        let inverse = field.inverse(&denominator)?;
        let term = field.mul(&field.mul(y_i, &numerator), &inverse);
        secret = field.add(&secret, &term);
    }

    Ok(secret)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use test_strategy::proptest;

    use super::*;
    use crate::poly::Polynomial;
    use crate::{biguint, biguint_vec};

    fn field() -> PrimeField {
        PrimeField::new(biguint!(1613)).unwrap()
    }

    #[test]
    fn recovers_known_constant() {
        let f = field();
        let xs = biguint_vec![1, 2, 3];
        let ys = biguint_vec![1494, 329, 965];
        assert_eq!(interpolate_at_zero(&xs, &ys, &f).unwrap(), biguint!(1234));
        assert_eq!(
            interpolate_at(&xs, &ys, &BigUint::zero(), &f).unwrap(),
            biguint!(1234)
        );
    }

    #[test]
    fn order_does_not_matter() {
        let f = field();
        let xs = biguint_vec![6, 2, 4];
        let ys = biguint_vec![775, 329, 176];
        assert_eq!(interpolate_at_zero(&xs, &ys, &f).unwrap(), biguint!(1234));
    }

    #[test]
    fn predicts_other_points() {
        let f = field();
        let xs = biguint_vec![1, 2, 3];
        let ys = biguint_vec![1494, 329, 965];
        assert_eq!(
            interpolate_at(&xs, &ys, &biguint!(5), &f).unwrap(),
            biguint!(1188)
        );
    }

    #[test]
    fn single_point_is_constant() {
        let f = field();
        let xs = biguint_vec![9];
        let ys = biguint_vec![77];
        assert_eq!(interpolate_at_zero(&xs, &ys, &f).unwrap(), biguint!(77));
    }

    #[test]
    fn duplicate_x_has_no_inverse() {
        let f = field();
        let xs = biguint_vec![1, 2, 1];
        let ys = biguint_vec![1494, 329, 1494];
        assert_eq!(
            interpolate_at_zero(&xs, &ys, &f),
            Err(MathError::NoInverse)
        );
        assert_eq!(
            interpolate_at(&xs, &ys, &BigUint::zero(), &f),
            Err(MathError::NoInverse)
        );

        // congruent modulo p counts as a duplicate
        let xs = biguint_vec![1, 1614];
        let ys = biguint_vec![5, 6];
        assert_eq!(
            interpolate_at_zero(&xs, &ys, &f),
            Err(MathError::NoInverse)
        );
    }

    #[test]
    fn malformed_input() {
        let f = field();
        assert_eq!(
            interpolate_at_zero(&biguint_vec![1, 2], &biguint_vec![3], &f),
            Err(MathError::LengthMismatch { xs: 2, ys: 1 })
        );
        assert_eq!(
            interpolate_at_zero(&[], &[], &f),
            Err(MathError::EmptyInterpolation)
        );
        assert_eq!(
            interpolate_at(&biguint_vec![1], &biguint_vec![3, 4], &biguint!(5), &f),
            Err(MathError::LengthMismatch { xs: 1, ys: 2 })
        );
        assert_eq!(
            interpolate_at(&[], &[], &biguint!(5), &f),
            Err(MathError::EmptyInterpolation)
        );
    }

    #[proptest(cases = 32)]
    fn interpolation_inverts_evaluation(
        secret: u128,
        #[strategy(1usize..12)] threshold: usize,
        seed: u64,
    ) {
        let f: PrimeField =
            "340282366920938463463374607431768211297".parse().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let secret = f.reduce(&BigUint::from(secret));
        let poly =
            Polynomial::random_with_constant(&secret, threshold, &f, &mut rng)
                .unwrap();

        let xs: Vec<BigUint> =
            (1..=threshold as u64).map(|x| f.element(x * 7 + 3)).collect();
        let ys: Vec<BigUint> = xs.iter().map(|x| poly.evaluate(x, &f)).collect();

        prop_assert_eq!(
            interpolate_at_zero(&xs, &ys, &f).unwrap(),
            secret.clone()
        );
        prop_assert_eq!(
            interpolate_at(&xs, &ys, &BigUint::zero(), &f).unwrap(),
            secret
        );
    }
}

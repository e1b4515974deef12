//! Shorthand for building big integers from primitive literals.

/// Construct a [`BigUint`](num_bigint::BigUint) from any primitive integer.
///
/// ```
/// use math::prelude::*;
///
/// let a = biguint!(42);
/// assert_eq!(a, BigUint::from(42u32));
/// ```
#[macro_export]
macro_rules! biguint {
    ($value:expr) => {
        $crate::num_bigint::BigUint::from(($value) as u128)
    };
}

/// Create a [`Vec`] of [`BigUint`](num_bigint::BigUint)s.
///
/// ```
/// use math::prelude::*;
///
/// let values = biguint_vec![1, 2, 3];
/// assert_eq!(values, vec![biguint!(1), biguint!(2), biguint!(3)]);
/// ```
#[macro_export]
macro_rules! biguint_vec {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::biguint!($value)),*]
    };
}

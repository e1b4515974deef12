use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SharingError};

/// One point `(x, y)` on the sharing polynomial.
///
/// `x` identifies the holder and is never zero, since the polynomial's value
/// at zero is the secret itself. Serialized with both coordinates as decimal
/// strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Share {
    #[serde(
        serialize_with = "decimal::serialize",
        deserialize_with = "decimal::deserialize_index"
    )]
    x: BigUint,
    #[serde(with = "decimal")]
    y: BigUint,
}

impl Share {
    pub fn new(x: BigUint, y: BigUint) -> Result<Self> {
        if x.is_zero() {
            return Err(SharingError::InvalidShareIndex(x.to_string()));
        }

        Ok(Self { x, y })
    }

    #[inline]
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    pub fn into_parts(self) -> (BigUint, BigUint) {
        (self.x, self.y)
    }
}

/// Renders as `x,y`, the format accepted back by [`FromStr`].
impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Share {
    type Err = SharingError;

    /// Parse `x,y`. Whitespace around either number and a surrounding
    /// `(...)` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || SharingError::ParseShare(s.to_string());

        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let (x, y) = inner.split_once(',').ok_or_else(parse_err)?;
        let x: BigUint = x.trim().parse().map_err(|_| parse_err())?;
        let y: BigUint = y.trim().parse().map_err(|_| parse_err())?;

        Self::new(x, y)
    }
}

mod decimal {
    use num_bigint::BigUint;
    use num_traits::Zero;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }

    pub fn deserialize_index<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = deserialize(deserializer)?;
        if value.is_zero() {
            return Err(D::Error::custom(
                "x-coordinate 0 is reserved for the secret",
            ));
        }
        Ok(value)
    }
}

pub mod constants;
pub mod error;
pub mod field;
pub mod interpolation;
mod macros;
pub mod poly;
pub mod prelude;
pub mod prime;
pub mod traits;

pub use num_bigint;

pub use field::PrimeField;
pub use poly::Polynomial;
